// Confidence signal -> display classification

/// Default diameter of the progress indicator, in pixels.
pub const INDICATOR_SIZE_DEFAULT: f64 = 50.0;

/// Smaller indicator used while a transaction is still unconfirmed.
pub const INDICATOR_SIZE_PENDING: f64 = 20.0;

/// Progress value meaning "indeterminate" (spinner instead of a fraction).
pub const PROGRESS_INDETERMINATE: f64 = -1.0;

/// Block depth at which a transaction is displayed as fully confirmed.
const FULLY_CONFIRMED_DEPTH: f64 = 6.0;

/// Raw confidence signal as reported by the wallet for one transaction.
///
/// The wallet is the source of truth; the tracker only reads these values
/// and never writes them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfidenceSignal {
    /// The wallet has no information about the transaction yet.
    Unknown,
    /// Broadcast but unconfirmed; `peers` is the number of peers that have
    /// announced the transaction.
    Pending { peers: u32 },
    /// Included in the best chain at the given block depth (1 = in the tip).
    Building { depth: u32 },
    /// Double-spent or otherwise permanently invalid.
    Dead,
}

impl ConfidenceSignal {
    /// Decodes a raw confidence triple as reported by the node feed.
    ///
    /// The numeric codes follow the upstream wallet encoding: 0 = unknown,
    /// 1 = building, 2 = pending, 4 = dead. Any other code degrades to
    /// [`ConfidenceSignal::Unknown`] so that a newer wallet cannot break the
    /// display; the unrecognized value is logged instead.
    pub fn from_raw(code: u32, peers: u32, depth: u32) -> Self {
        match code {
            0 => ConfidenceSignal::Unknown,
            1 => ConfidenceSignal::Building { depth },
            2 => ConfidenceSignal::Pending { peers },
            4 => ConfidenceSignal::Dead,
            other => {
                log::warn!(
                    "[CONFIDENCE] unrecognized confidence code {}, treating as unknown",
                    other
                );
                ConfidenceSignal::Unknown
            }
        }
    }
}

/// Display-ready outcome of classifying one confidence signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// User-facing status line. Empty for [`ConfidenceSignal::Unknown`].
    pub status_text: String,
    /// Progress fraction in `[0, 1]`, [`PROGRESS_INDETERMINATE`] for a
    /// spinner, or `None` when the previous value must be kept.
    pub progress: Option<f64>,
    /// Indicator size hint in pixels.
    pub indicator_size_px: f64,
}

/// Maps a confidence signal to its display classification.
///
/// Pure and total over the four variants. Six confirmations count as fully
/// confirmed, so `Building` progress is `min(1, depth / 6)`.
///
/// `Dead` returns `progress: None`: when a transaction dies the progress
/// value is deliberately held at whatever it last was, a documented quirk
/// of the display.
pub fn classify(signal: &ConfidenceSignal) -> Classification {
    match signal {
        ConfidenceSignal::Unknown => Classification {
            status_text: String::new(),
            progress: Some(0.0),
            indicator_size_px: INDICATOR_SIZE_DEFAULT,
        },
        ConfidenceSignal::Pending { peers } => Classification {
            status_text: format!("Seen by {} peer(s) / 0 confirmations", peers),
            progress: Some(PROGRESS_INDETERMINATE),
            indicator_size_px: INDICATOR_SIZE_PENDING,
        },
        ConfidenceSignal::Building { depth } => Classification {
            status_text: format!("Confirmed in {} block(s)", depth),
            progress: Some((f64::from(*depth) / FULLY_CONFIRMED_DEPTH).min(1.0)),
            indicator_size_px: INDICATOR_SIZE_DEFAULT,
        },
        ConfidenceSignal::Dead => Classification {
            status_text: "Transaction is invalid.".to_string(),
            progress: None,
            indicator_size_px: INDICATOR_SIZE_DEFAULT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_progress_is_clamped_sixths() {
        let cases = [(0, 0.0), (3, 0.5), (6, 1.0), (12, 1.0)];
        for (depth, expected) in cases {
            let c = classify(&ConfidenceSignal::Building { depth });
            assert_eq!(c.progress, Some(expected), "depth {}", depth);
            assert_eq!(c.indicator_size_px, INDICATOR_SIZE_DEFAULT);
        }
    }

    #[test]
    fn building_status_names_the_depth() {
        let c = classify(&ConfidenceSignal::Building { depth: 3 });
        assert_eq!(c.status_text, "Confirmed in 3 block(s)");
    }

    #[test]
    fn pending_is_indeterminate_regardless_of_peers() {
        for peers in [0, 1, 7, 1000] {
            let c = classify(&ConfidenceSignal::Pending { peers });
            assert_eq!(c.progress, Some(PROGRESS_INDETERMINATE));
            assert_eq!(c.indicator_size_px, INDICATOR_SIZE_PENDING);
            assert!(c.status_text.contains(&peers.to_string()));
        }
    }

    #[test]
    fn unknown_clears_status_and_progress() {
        let c = classify(&ConfidenceSignal::Unknown);
        assert_eq!(c.status_text, "");
        assert_eq!(c.progress, Some(0.0));
        assert_eq!(c.indicator_size_px, INDICATOR_SIZE_DEFAULT);
    }

    #[test]
    fn dead_holds_previous_progress() {
        let c = classify(&ConfidenceSignal::Dead);
        assert_eq!(c.status_text, "Transaction is invalid.");
        assert_eq!(c.progress, None);
    }

    #[test]
    fn from_raw_maps_known_codes() {
        assert_eq!(ConfidenceSignal::from_raw(0, 3, 2), ConfidenceSignal::Unknown);
        assert_eq!(
            ConfidenceSignal::from_raw(1, 3, 2),
            ConfidenceSignal::Building { depth: 2 }
        );
        assert_eq!(
            ConfidenceSignal::from_raw(2, 3, 2),
            ConfidenceSignal::Pending { peers: 3 }
        );
        assert_eq!(ConfidenceSignal::from_raw(4, 3, 2), ConfidenceSignal::Dead);
    }

    #[test]
    fn from_raw_degrades_unrecognized_codes_to_unknown() {
        assert_eq!(ConfidenceSignal::from_raw(9, 3, 2), ConfidenceSignal::Unknown);
    }
}
