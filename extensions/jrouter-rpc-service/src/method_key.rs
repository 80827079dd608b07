use xxhash_rust::xxh3::xxh3_64;

/// Case-insensitive lookup key for a method name.
///
/// The name is lowercased before hashing with xxh3-64, so `"Echo"` and
/// `"echo"` share a key. Keys only narrow the search; callers still compare
/// the lowercased names to rule out hash collisions.
///
/// ```rust
/// use jrouter_rpc_service::method_key;
/// assert_eq!(method_key("Math.Add"), method_key("math.add"));
/// assert_ne!(method_key("math.add"), method_key("math.mult"));
/// ```
pub fn method_key(name: &str) -> u64 {
    xxh3_64(name.to_lowercase().as_bytes())
}
