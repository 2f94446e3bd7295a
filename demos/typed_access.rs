//! Typed pointer access over a configuration document.
//!
//! Run with: cargo run --example typed_access

use json_getter::{
    get_bool_by_pointer_or, get_string_by_pointer, get_u32_by_pointer, get_u64_by_pointer_or,
    Pointer,
};
use serde_json::json;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = json!({
        "service": {
            "name": "billing",
            "port": 8443,
            "upstreams": [
                {"host": "db1.internal", "weight": 3},
                {"host": "db2.internal", "weight": 1}
            ]
        }
    });

    // Required fields: errors carry the full pointer text.
    let name = get_string_by_pointer(&config, "/service/name")?;
    let port = get_u32_by_pointer(&config, "/service/port")?;
    println!("service {} listens on {}", name, port);

    // Optional fields: absent or malformed collapses into the default.
    let tls = get_bool_by_pointer_or(&config, "/service/tls", false);
    let timeout = get_u64_by_pointer_or(&config, "/service/timeout_secs", 30);
    println!("tls={} timeout={}s", tls, timeout);

    // Prebuilt pointers can be reused across documents and iterations.
    let weight = Pointer::from_tokens(["service", "upstreams", "0", "weight"]);
    println!("first upstream weight: {}", get_u32_by_pointer(&config, &weight)?);

    // A failing lookup reads like: cannot get /service/upstreams: cannot convert to array
    match get_u32_by_pointer(&config, "/service/upstreams") {
        Err(err) => println!("as expected: {}", err),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
