//! Forked registries are addressed by contract inside abstract delegation
//! targets, e.g. `ns1.0x3c4...b2._eth`.

const ADDRESS_HEX_LEN: usize = 40;

/// First label of `target` that is a `0x`-prefixed 20-byte hex address,
/// lowercased.
pub fn contract_address(target: &str) -> Option<String> {
    target
        .trim_end_matches('.')
        .split('.')
        .find(|label| is_contract_address(label))
        .map(str::to_ascii_lowercase)
}

fn is_contract_address(label: &str) -> bool {
    let Some(hex) = label
        .strip_prefix("0x")
        .or_else(|| label.strip_prefix("0X"))
    else {
        return false;
    };
    hex.len() == ADDRESS_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit())
}
