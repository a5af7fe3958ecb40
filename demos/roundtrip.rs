//! Build a container, encode it, and read it back

use zero::{ZeroArray, ZeroMap, format::hex_dump};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Zero Format Round-Trip Example");
    println!("==============================\n");

    let mut flags = ZeroArray::new();
    flags.add_boolean(true).add_integer(1000).add_string("abc");

    let mut login = ZeroMap::new();
    login
        .put_string("user", "ayla")
        .put_null("zone")
        .put_nested_array("flags", flags);
    println!("Built map:\n{login}");

    // Encode
    let encoded = login.to_bytes()?;
    println!("Encoded to {} bytes:\n{}\n", encoded.len(), hex_dump(&encoded));

    // Decode
    let decoded = ZeroMap::from_bytes(&encoded)?;
    println!("Decoded user={:?}", decoded.get_string("user")?);
    println!(
        "zone present={} null={}",
        decoded.contains_key("zone"),
        decoded.is_null("zone")
    );

    assert_eq!(decoded, login);
    println!("\nRound-trip OK");

    Ok(())
}
