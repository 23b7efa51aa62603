use chrono::NaiveTime;
use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder,
};

use crate::blog::{parse_date, BlogError, BlogPost};
use crate::site::SITE;

fn rfc2822_date(date: &str) -> Result<String, BlogError> {
    let day = parse_date(date)?;
    Ok(day.and_time(NaiveTime::default()).and_utc().to_rfc2822())
}

fn build_item(post: &BlogPost) -> Result<Item, BlogError> {
    let link = format!("{}{}", SITE.url, post.href());
    let guid = GuidBuilder::default().value(&link).permalink(true).build();
    Ok(ItemBuilder::default()
        .title(post.title.to_string())
        .description(post.excerpt.to_string())
        .author(format!("{} ({})", SITE.email, SITE.owner))
        .categories(vec![rss::Category {
            name: post.category.to_string(),
            domain: None,
        }])
        .pub_date(rfc2822_date(post.date)?)
        .link(link)
        .guid(guid)
        .build())
}

/// Feed for every post, in the order given.
pub fn build_channel(posts: &[BlogPost]) -> Result<Channel, BlogError> {
    let items = posts.iter().map(build_item).collect::<Result<Vec<_>, _>>()?;

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{}/rss.xml", SITE.url));
    atom_link.set_mime_type("application/rss+xml".to_string());

    Ok(ChannelBuilder::default()
        .title(format!("{}'s Blog", SITE.owner))
        .description("Thoughts, tutorials, and insights about web development, technology trends, and everything I learn along my coding journey.")
        .link(format!("{}/blog", SITE.url))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build())
}
