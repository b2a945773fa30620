// # ddns-update-http
//
// reqwest-backed transport for the ddns-update client.
//
// Production implementations of the core trait seams:
// - **DohResolver**: DoH JSON query for the published record
// - **HttpIpSource**: plain GET against a "what is my IP" endpoint
// - **HttpUpdateService**: authenticated JSON POST to the update endpoint
//
// Every call builds its own client, so nothing is pooled or kept alive
// across the three steps. Redirects are not followed and no timeout is
// set; a hung call blocks the run until whatever scheduled it gives up.

pub mod doh;
pub mod myip;
pub mod transport;
pub mod update;

pub use doh::DohResolver;
pub use myip::HttpIpSource;
pub use transport::{get, post_json};
pub use update::HttpUpdateService;
