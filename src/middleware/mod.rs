pub mod access_gate;
pub mod cookies;
pub mod response;

pub use access_gate::access_gate_middleware;
pub use cookies::{clear_token_cookie, is_cookie_value, set_token_cookie, token_from_headers};
pub use response::{ApiResponse, ApiResult, IntoApiResponse};
