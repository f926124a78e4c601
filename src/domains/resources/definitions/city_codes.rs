//! City code reference sheet.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// City code conventions (static Markdown).
pub struct CityCodesResource;

impl ResourceDefinition for CityCodesResource {
    const URI: &'static str = "looking-glass://docs/city-codes";
    const NAME: &'static str = "City Codes";
    const DESCRIPTION: &'static str =
        "How cities are identified in Looking Glass queries, with common codes";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(DOCUMENTATION.to_string())
    }
}

const DOCUMENTATION: &str = r#"# City Codes

Cities are identified by 3-letter IATA metropolitan area codes. Codes are
case-insensitive on input and always reported in upper case.

| Code | City |
|------|------|
| HKG  | Hong Kong |
| TYO  | Tokyo |
| NYC  | New York |
| LON  | London |
| SIN  | Singapore |
| LAX  | Los Angeles |
| MOW  | Moscow |

Unknown a code? Call `get_city_code` with the English city name.

## Network types

- `private_line`: the private backbone (dedicated lines).
- `public_network`: the public internet.

Omit `network_type` in `get_city_delay` to compare both. A network without a
measurement reports `no data provide`.

## Router diagnostics

`router_explore` accepts `ping`, `mtr` or `bgp` as `explore_type`.
"#;
