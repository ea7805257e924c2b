//! Trunk entry point for the client-side rendered bundle.

fn main() {
    #[cfg(feature = "csr")]
    portfolio_client::start();
}
