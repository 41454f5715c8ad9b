//! Issue a token, wait a few seconds, then verify it
//!
//! Run with `RUST_LOG=debug` to see the logging output.

use minijwt::{decode, encode, JwtResult};
use minijwt_common::LoggingTransformer;
use std::time::Duration;

fn main() -> JwtResult<()> {
    LoggingTransformer::init();

    let token = encode("my_name", 200, "123456")?;
    std::thread::sleep(Duration::from_secs(3));
    let subject = decode(&token, "123456")?;

    println!("{token}");
    println!("{subject}");
    Ok(())
}
