mod error;
mod resolver;
mod scrape;

pub use error::ResolveError;
pub use resolver::Resolver;
pub use scrape::extract_service_link;
