use std::io::Write;

use datagrepper_api::{DgConnector, MessagePage};

use crate::config::{Effective, OutputFormat};
use crate::error::FeedError;

pub async fn run(eff: &Effective) -> Result<(), FeedError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to(eff, &mut out).await
}

/// Same as `run`, writing the feed (or the URL) to `out`.
async fn run_to(eff: &Effective, out: &mut impl Write) -> Result<(), FeedError> {
    let mut builder = reqwest::Client::builder().user_agent(eff.user_agent.clone());
    if let Some(timeout) = eff.timeout {
        builder = builder.timeout(timeout);
    }
    let http = builder.build().map_err(FeedError::Client)?;
    let dg = DgConnector::with_client(&eff.endpoint, http)?;

    if eff.print_url {
        let url = dg.request_url(&eff.package, &eff.options)?;
        writeln!(out, "{url}")?;
        return Ok(());
    }

    tracing::info!(package = %eff.package, endpoint = %dg.endpoint(), "fetching feed");
    let page = dg.get_messages(&eff.package, &eff.options).await?;

    match eff.format {
        OutputFormat::Text => render_text(&page, out)?,
        OutputFormat::Json => render_json(&page, out)?,
    }
    Ok(())
}

fn render_json(page: &MessagePage, out: &mut impl Write) -> Result<(), FeedError> {
    serde_json::to_writer_pretty(&mut *out, page)?;
    writeln!(out)?;
    Ok(())
}

/// One block per message, then a page footer.
fn render_text(page: &MessagePage, out: &mut impl Write) -> std::io::Result<()> {
    if page.messages.is_empty() {
        writeln!(out, "no messages")?;
    }
    for msg in &page.messages {
        let date = msg.date().unwrap_or_default();
        let subtitle = msg.subtitle().unwrap_or("");
        match msg.title() {
            Some(title) => writeln!(out, "{date}  {title}: {subtitle}")?,
            None => writeln!(out, "{date}  {subtitle}")?,
        }
        if let Some(link) = msg.link() {
            writeln!(out, "    {link}")?;
        }
    }
    writeln!(
        out,
        "page {} of {} ({} messages)",
        page.page, page.pages, page.count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use datagrepper_api::{Message, Meta, QueryOptions};
    use serde_json::json;

    fn effective(endpoint: &str) -> Effective {
        Effective {
            endpoint: endpoint.into(),
            package: "firefox".into(),
            options: QueryOptions::page(2),
            format: OutputFormat::Text,
            timeout: None,
            user_agent: "dg-feed/test".into(),
            print_url: true,
        }
    }

    fn message(id: &str, meta: serde_json::Value) -> Message {
        Message {
            meta: Meta(meta.as_object().cloned().unwrap_or_default()),
            id: id.into(),
        }
    }

    #[test]
    fn test_render_text() {
        let page = MessagePage {
            messages: vec![
                message(
                    "a",
                    json!({"date": "2021-01-01", "subtitle": "built", "link": "http://x", "title": "koji"}),
                ),
                message("b", json!({"subtitle": "tagged"})),
            ],
            pages: 5,
            page: 2,
            count: 42,
        };

        let mut buf = Vec::new();
        render_text(&page, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "2021-01-01  koji: built\n    http://x\n  tagged\npage 2 of 5 (42 messages)\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let page = MessagePage {
            messages: Vec::new(),
            pages: 0,
            page: 1,
            count: 0,
        };
        let mut buf = Vec::new();
        render_text(&page, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "no messages\npage 1 of 0 (0 messages)\n"
        );
    }

    #[tokio::test]
    async fn test_print_url_skips_request() {
        // Nothing listens on the discard port, so a fetch would fail.
        let eff = effective("http://127.0.0.1:9/datagrepper");
        let mut buf = Vec::new();
        run_to(&eff, &mut buf).await.unwrap();

        let expected = DgConnector::new(&eff.endpoint)
            .unwrap()
            .request_url(&eff.package, &eff.options)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{expected}\n"));
    }

    #[tokio::test]
    async fn test_print_url_rejects_blank_package() {
        let mut eff = effective("http://127.0.0.1:9/datagrepper");
        eff.package = String::new();
        let err = run_to(&eff, &mut Vec::new()).await.unwrap_err();
        assert!(matches!(err, FeedError::Connector(_)));
    }

    #[test]
    fn test_render_json() {
        let page = MessagePage {
            messages: vec![message(
                "abc",
                json!({"subtitle": "built", "link": "http://x", "icon": "i.png", "date": "2021-01-01"}),
            )],
            pages: 5,
            page: 2,
            count: 42,
        };

        let mut buf = Vec::new();
        render_json(&page, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({
                "messages": [{
                    "subtitle": "built",
                    "link": "http://x",
                    "icon": "i.png",
                    "date": "2021-01-01",
                    "id": "abc"
                }],
                "pages": 5,
                "page": 2,
                "count": 42
            })
        );
        let back: MessagePage = serde_json::from_value(value).unwrap();
        assert_eq!(back, page);
    }
}
