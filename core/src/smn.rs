//! # SMN Requests
//!
//! The `smn` file takes either a bare 4-byte address (the following read
//! returns the value at that address) or an 8-byte address/value pair,
//! which performs the write.

/// Size of an address-only request
pub const SMN_READ_REQUEST_SIZE: usize = 4;

/// Size of an address/value request
pub const SMN_WRITE_REQUEST_SIZE: usize = 8;

/// Size of the value read back
pub const SMN_VALUE_SIZE: usize = 4;

/// Encode the request selecting `address` for a read
#[inline]
pub const fn encode_read(address: u32) -> [u8; SMN_READ_REQUEST_SIZE] {
    address.to_ne_bytes()
}

/// Encode the request writing `value` to `address`
pub const fn encode_write(address: u32, value: u32) -> [u8; SMN_WRITE_REQUEST_SIZE] {
    let a = address.to_ne_bytes();
    let v = value.to_ne_bytes();
    [a[0], a[1], a[2], a[3], v[0], v[1], v[2], v[3]]
}

/// Decode the value returned by a read
#[inline]
pub const fn decode_value(bytes: [u8; SMN_VALUE_SIZE]) -> u32 {
    u32::from_ne_bytes(bytes)
}
