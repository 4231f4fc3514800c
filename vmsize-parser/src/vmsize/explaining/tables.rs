//! Static lookup tables for family codes and feature letters
//!
//! These follow the provider's published naming conventions and will lag behind new
//! codes. Lookups that miss fall back to [`UNKNOWN`] instead of failing.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const UNKNOWN: &str = "UNKNOWN";

static FAMILIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("A", "entry-level economical"),
        ("B", "economical burstable"),
        ("Bs", "economical burstable"),
        ("D", "general purpose compute"),
        ("E", "memory optimized"),
        ("F", "compute optimized"),
        ("G", "memory and storage optimized"),
        ("H", "high performance computing"),
        ("L", "storage optimized"),
        ("Ls", "storage optimized"),
        ("M", "memory optimized, largest memory sizes"),
        ("Mv2", "memory optimized, largest memory sizes (second generation)"),
        ("N", "GPU enabled"),
    ])
});

static FEATURES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("a", "AMD-based processor"),
        ("b", "block storage performance"),
        ("c", "confidential"),
        ("C", "confidential"),
        ("d", "diskful, a local temp disk is present"),
        ("i", "isolated size"),
        ("l", "low memory, less memory than the memory intensive size"),
        ("m", "memory intensive, the most memory in a particular size"),
        ("p", "ARM-based processor"),
        ("r", "RDMA capable"),
        ("s", "premium storage capable"),
        ("t", "tiny memory, the smallest memory in a particular size"),
        ("NP", "node packing"),
    ])
});

pub fn family_description(code: &str) -> &'static str {
    FAMILIES.get(code).copied().unwrap_or(UNKNOWN)
}

pub fn feature_description(code: &str) -> &'static str {
    FEATURES.get(code).copied().unwrap_or(UNKNOWN)
}
