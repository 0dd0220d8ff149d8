//! Auth endpoint clients and client-local token persistence for the portal.

mod atomic_io;
mod gateway;
mod http;
mod mock;
mod token_store;
pub mod wire;

pub use gateway::{AuthGateway, AuthGatewayError};
pub use http::{
    HttpAuthGateway, HttpAuthGatewayConfig, LOGIN_PATH, RESEND_OTP_PATH, VERIFY_OTP_PATH,
};
pub use mock::{MockAuthGateway, DEFAULT_MOCK_OTP};
pub use token_store::{
    FileTokenStore, MemoryTokenStore, TokenStore, TokenStoreError, ACCESS_TOKEN_KEY,
    IDENTITY_KEY, REFRESH_TOKEN_KEY,
};
