use std::hash::Hash;

/// A value that can be found by one or more keyword strings.
///
/// Implementors must keep `keywords` consistent with `Eq`/`Hash`: two equal
/// items are expected to report the same keywords. The list may be empty, and
/// individual keywords may be empty strings.
pub trait Searchable: Clone + Eq + Hash {
    /// Keywords in their original casing, in declaration order.
    fn keywords(&self) -> Vec<String>;
}

impl Searchable for String {
    fn keywords(&self) -> Vec<String> {
        vec![self.clone()]
    }
}
