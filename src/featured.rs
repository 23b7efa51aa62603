/// Records that can be promoted to the highlighted section of a page.
pub trait Featured {
    fn is_featured(&self) -> bool;
}

/// Split `items` into `(featured, other)`, keeping the relative order of each
/// side. Every item lands in exactly one of the two.
pub fn partition_featured<T: Featured>(items: &[T]) -> (Vec<&T>, Vec<&T>) {
    items.iter().partition(|item| item.is_featured())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(u8, bool);

    impl Featured for Item {
        fn is_featured(&self) -> bool {
            self.1
        }
    }

    #[test]
    fn test_partition_is_stable() {
        let items = [
            Item(0, false),
            Item(1, true),
            Item(2, false),
            Item(3, true),
            Item(4, false),
        ];
        let (featured, other) = partition_featured(&items);
        assert_eq!(featured.iter().map(|i| i.0).collect::<Vec<_>>(), [1, 3]);
        assert_eq!(other.iter().map(|i| i.0).collect::<Vec<_>>(), [0, 2, 4]);
    }

    #[test]
    fn test_partition_empty() {
        let items: [Item; 0] = [];
        let (featured, other) = partition_featured(&items);
        assert!(featured.is_empty());
        assert!(other.is_empty());
    }
}
