//! Latest-request tracking
//!
//! Every network call a controller makes is tagged with a [`RequestTag`]
//! from its [`LatestOf`]. When the result comes back through the message
//! loop the controller asks whether the tag is still current; only the most
//! recently issued request for the same key may change state. Older results
//! still arrive (in-flight calls are never aborted) and are dropped.

/// Identity of one issued request: a monotonically increasing sequence number
/// plus the key (intent) that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestTag<K> {
    pub seq: u64,
    pub key: K,
}

/// Tracks the latest request issued for one stream of intents.
#[derive(Debug, Clone)]
pub struct LatestOf<K> {
    next_seq: u64,
    current: Option<RequestTag<K>>,
}

impl<K> Default for LatestOf<K> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            current: None,
        }
    }
}

impl<K: Clone + PartialEq> LatestOf<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a tag for a new request, superseding any outstanding one.
    pub fn issue(&mut self, key: K) -> RequestTag<K> {
        self.next_seq += 1;
        let tag = RequestTag {
            seq: self.next_seq,
            key,
        };
        self.current = Some(tag.clone());
        tag
    }

    /// Whether `tag` identifies the outstanding request.
    ///
    /// Both the sequence number and the key must match.
    pub fn is_current(&self, tag: &RequestTag<K>) -> bool {
        self.current.as_ref() == Some(tag)
    }

    /// Accept a result for `tag`.
    ///
    /// Returns `true` and clears the outstanding request when `tag` is
    /// current; returns `false` (and changes nothing) for a stale tag.
    pub fn settle(&mut self, tag: &RequestTag<K>) -> bool {
        if self.is_current(tag) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Forget the outstanding request so its result will be treated as stale.
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    pub fn in_flight(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&RequestTag<K>> {
        self.current.as_ref()
    }
}
