use std::fmt;

/// The streaming platforms a deep link can be resolved for.
///
/// The set is fixed: identifiers come from the aggregator's own service
/// naming and never change at runtime. Membership checks are exact and
/// case-sensitive, so `"Spotify"` is not a valid selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Spotify,
    Itunes,
    Youtube,
    Tidal,
    AmazonMusic,
    Pandora,
    Deezer,
    Audiomack,
    Qobuz,
}

impl Service {
    /// Every supported service, in listing order.
    pub const ALL: [Service; 9] = [
        Service::Spotify,
        Service::Itunes,
        Service::Youtube,
        Service::Tidal,
        Service::AmazonMusic,
        Service::Pandora,
        Service::Deezer,
        Service::Audiomack,
        Service::Qobuz,
    ];

    /// The identifier as it appears in the aggregator's markup.
    pub fn id(self) -> &'static str {
        match self {
            Service::Spotify => "spotify",
            Service::Itunes => "itunes",
            Service::Youtube => "youtube",
            Service::Tidal => "tidal",
            Service::AmazonMusic => "amazonMusic",
            Service::Pandora => "pandora",
            Service::Deezer => "deezer",
            Service::Audiomack => "audiomack",
            Service::Qobuz => "qobuz",
        }
    }

    /// Exact-match lookup of a user-supplied identifier.
    pub fn from_id(id: &str) -> Option<Service> {
        Service::ALL.into_iter().find(|service| service.id() == id)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
