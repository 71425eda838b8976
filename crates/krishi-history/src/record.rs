//! Records persisted by the advisory tools.

use krishi_types::DiseaseDiagnosis;
use serde::{Deserialize, Serialize};

/// Default number of detections kept.
pub const DISEASE_HISTORY_CAPACITY: usize = 50;

/// One disease detection as shown in the dashboard's history panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRecord {
    /// Host crop name as entered.
    pub crop: String,
    /// Where the analysed photo came from.
    pub image: String,
    /// Classifier output.
    pub diagnosis: DiseaseDiagnosis,
}
