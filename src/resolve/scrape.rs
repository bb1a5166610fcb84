use scraper::{Html, Selector};

use crate::services::Service;

/// Pulls the requested service's deep link out of an aggregator page.
///
/// The page marks each service's link button with a `data-testid` attribute
/// that embeds the service identifier twice
/// (`ServiceButton spotify itemLinkButton spotifyItemLinkButton`). That
/// convention belongs to the aggregator and can change under us, so the
/// whole matching strategy lives behind this one function.
///
/// If the markup somehow carries several matching anchors, the first one in
/// document order wins.
pub fn extract_service_link(html: &str, service: Service) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(&format!(
        r#"a[data-testid="ServiceButton {id} itemLinkButton {id}ItemLinkButton"]"#,
        id = service.id()
    ))
    .ok()?;
    document
        .select(&selector)
        .next()?
        .value()
        .attr("href")
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(anchors: &str) -> String {
        format!("<html><body><main>{anchors}</main></body></html>")
    }

    #[test]
    fn finds_the_matching_anchor() {
        let html = page(concat!(
            r#"<a data-testid="ServiceButton tidal itemLinkButton tidalItemLinkButton" href="https://tidal.com/track/1">Tidal</a>"#,
            r#"<a data-testid="ServiceButton spotify itemLinkButton spotifyItemLinkButton" href="https://open.spotify.com/track/xyz">Spotify</a>"#,
        ));
        assert_eq!(
            extract_service_link(&html, Service::Spotify),
            Some("https://open.spotify.com/track/xyz".to_owned())
        );
    }

    #[test]
    fn missing_service_yields_none() {
        let html = page(
            r#"<a data-testid="ServiceButton spotify itemLinkButton spotifyItemLinkButton" href="https://open.spotify.com/track/xyz">Spotify</a>"#,
        );
        assert_eq!(extract_service_link(&html, Service::Tidal), None);
    }

    #[test]
    fn partial_testid_does_not_match() {
        // The key embeds the identifier twice; an anchor carrying only the
        // plain ServiceButton marker is not a link button.
        let html = page(r#"<a data-testid="ServiceButton deezer" href="https://deezer.com/1">Deezer</a>"#);
        assert_eq!(extract_service_link(&html, Service::Deezer), None);
    }

    #[test]
    fn duplicate_anchors_take_the_first_in_document_order() {
        let html = page(concat!(
            r#"<a data-testid="ServiceButton qobuz itemLinkButton qobuzItemLinkButton" href="https://qobuz.com/first">Qobuz</a>"#,
            r#"<a data-testid="ServiceButton qobuz itemLinkButton qobuzItemLinkButton" href="https://qobuz.com/second">Qobuz</a>"#,
        ));
        assert_eq!(
            extract_service_link(&html, Service::Qobuz),
            Some("https://qobuz.com/first".to_owned())
        );
    }

    #[test]
    fn anchor_without_href_yields_none() {
        let html = page(
            r#"<a data-testid="ServiceButton pandora itemLinkButton pandoraItemLinkButton">Pandora</a>"#,
        );
        assert_eq!(extract_service_link(&html, Service::Pandora), None);
    }
}
