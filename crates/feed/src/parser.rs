use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::models::FeedItem;
use crate::FeedError;

/// Parse a podcast RSS feed from raw XML bytes
pub fn parse_podcast_feed(xml: &[u8]) -> Result<Vec<FeedItem>, FeedError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut buf = Vec::new();

    let mut current_item: Option<FeedItem> = None;
    let mut current_element = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                current_element = name.clone();

                if name == "item" {
                    current_item = Some(FeedItem::default());
                }

                if name == "enclosure" {
                    if let Some(ref mut item) = current_item {
                        read_enclosure_url(&e, item);
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                // Enclosures are usually self-closing: <enclosure url="..." />
                if name == "enclosure" {
                    if let Some(ref mut item) = current_item {
                        read_enclosure_url(&e, item);
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                if name == "item" {
                    if let Some(item) = current_item.take() {
                        items.push(item);
                    }
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                if let Some(ref mut item) = current_item {
                    let text = e.unescape().unwrap_or_default().to_string();
                    if text.is_empty() {
                        continue;
                    }
                    match current_element.as_str() {
                        "title" => item.title = text,
                        "pubDate" => item.pub_date = Some(text),
                        "itunes:duration" => item.itunes_duration = Some(text),
                        _ => {}
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(ref mut item) = current_item {
                    if current_element == "title" {
                        item.title = String::from_utf8_lossy(&e).to_string();
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Parse(format!("XML parse error: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(items)
}

fn read_enclosure_url(e: &quick_xml::events::BytesStart<'_>, item: &mut FeedItem) {
    // Only the first enclosure counts
    if item.audio_url.is_some() {
        return;
    }
    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref());
        if key.as_ref() == "url" {
            item.audio_url = Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd">
  <channel>
    <title>Nettgeflüster</title>
    <item>
      <title>Folge #42: Vogelkunde</title>
      <pubDate>Mon, 10 Mar 2025 06:00:00 +0000</pubDate>
      <enclosure url="https://cdn.example.de/ep42.mp3" type="audio/mpeg" length="123" />
      <itunes:duration>1:05:00</itunes:duration>
    </item>
    <item>
      <title><![CDATA[Folge #43: Nistkästen]]></title>
      <pubDate>Mon, 17 Mar 2025 06:00:00 +0000</pubDate>
      <enclosure url="https://cdn.example.de/ep43.mp3" type="audio/mpeg" length="456"/>
      <itunes:duration>2700</itunes:duration>
    </item>
    <item>
      <title>Trailer</title>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_podcast_feed() {
        let items = parse_podcast_feed(SAMPLE_FEED.as_bytes()).unwrap();
        assert_eq!(items.len(), 3);

        let first = &items[0];
        assert_eq!(first.title, "Folge #42: Vogelkunde");
        assert_eq!(first.episode_number(), Some(42));
        assert_eq!(
            first.audio_url.as_deref(),
            Some("https://cdn.example.de/ep42.mp3")
        );
        assert_eq!(first.duration_minutes(), Some(65));
        assert_eq!(
            first.publish_date(),
            Some(chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
        );

        let second = &items[1];
        assert_eq!(second.title, "Folge #43: Nistkästen");
        assert_eq!(second.duration_minutes(), Some(45));

        let third = &items[2];
        assert_eq!(third.episode_number(), None);
        assert!(third.audio_url.is_none());
    }

    #[test]
    fn test_parse_invalid_xml() {
        let result = parse_podcast_feed(b"<rss><channel><item></rss>");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_empty_feed() {
        let items = parse_podcast_feed(
            b"<rss version=\"2.0\"><channel><title>leer</title></channel></rss>",
        )
        .unwrap();
        assert!(items.is_empty());
    }
}
