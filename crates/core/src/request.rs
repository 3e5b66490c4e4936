//! Request classification and typed request drafts.
//!
//! A draft is the in-memory form state of one wizard instance. Each request
//! group (and each exhibit type) is its own variant carrying only the fields
//! its question set asks for, so "is this field required" is decided by the
//! variant rather than by looking up string keys.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Date, YesNo};

// ---------------------------------------------------------------------------
// Request groups
// ---------------------------------------------------------------------------

pub const GROUP_MOTION: &str = "motion";
pub const GROUP_EXHIBIT: &str = "exhibit";
pub const GROUP_DISCOVERY: &str = "discovery";
pub const GROUP_CERTIFICATE: &str = "certificate";
pub const GROUP_PLEADING: &str = "pleading";
pub const GROUP_NOTICES: &str = "notices";

/// All valid request group strings.
pub const VALID_GROUPS: &[&str] = &[
    GROUP_MOTION,
    GROUP_EXHIBIT,
    GROUP_DISCOVERY,
    GROUP_CERTIFICATE,
    GROUP_PLEADING,
    GROUP_NOTICES,
];

/// First level of the request classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestGroup {
    Motion,
    Exhibit,
    Discovery,
    Certificate,
    Pleading,
    Notices,
}

impl RequestGroup {
    pub const ALL: [RequestGroup; 6] = [
        Self::Motion,
        Self::Exhibit,
        Self::Discovery,
        Self::Certificate,
        Self::Pleading,
        Self::Notices,
    ];

    /// Parse a group string as sent by the portal.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s.trim() {
            GROUP_MOTION => Ok(Self::Motion),
            GROUP_EXHIBIT => Ok(Self::Exhibit),
            GROUP_DISCOVERY => Ok(Self::Discovery),
            GROUP_CERTIFICATE => Ok(Self::Certificate),
            GROUP_PLEADING => Ok(Self::Pleading),
            GROUP_NOTICES => Ok(Self::Notices),
            "" => Err(CoreError::Validation(
                "A request group must be selected".to_string(),
            )),
            other => Err(CoreError::Validation(format!(
                "Invalid request group '{other}'. Must be one of: {}",
                VALID_GROUPS.join(", ")
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Motion => GROUP_MOTION,
            Self::Exhibit => GROUP_EXHIBIT,
            Self::Discovery => GROUP_DISCOVERY,
            Self::Certificate => GROUP_CERTIFICATE,
            Self::Pleading => GROUP_PLEADING,
            Self::Notices => GROUP_NOTICES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Motion => "Motion",
            Self::Exhibit => "Exhibit",
            Self::Discovery => "Discovery",
            Self::Certificate => "Certificate",
            Self::Pleading => "Pleading",
            Self::Notices => "Notices",
        }
    }

    /// Request types offered on the selection tab for this group.
    pub fn request_types(self) -> &'static [&'static str] {
        match self {
            Self::Motion => MOTION_TYPES,
            Self::Exhibit => EXHIBIT_TYPES,
            Self::Discovery => DISCOVERY_TYPES,
            Self::Certificate => CERTIFICATE_TYPES,
            Self::Pleading => PLEADING_TYPES,
            Self::Notices => NOTICE_TYPES,
        }
    }
}

// ---------------------------------------------------------------------------
// Request type catalog
// ---------------------------------------------------------------------------

pub const MOTION_TYPES: &[&str] = &[
    "Motion to Compel",
    "Motion for Continuance",
    "Motion for Extension of Time",
    "Motion for Protective Order",
    "Motion to Dismiss",
    "Motion for Summary Decision",
    "Other Motion",
];

pub const EXHIBIT_TYPE_DOCUMENT: &str = "Document";
pub const EXHIBIT_TYPE_OVERSIZED_DOCUMENT: &str = "Oversized Document";
pub const EXHIBIT_TYPE_PHOTOGRAPH: &str = "Photograph";
pub const EXHIBIT_TYPE_RECORDING: &str = "Recording";
pub const EXHIBIT_TYPE_PHYSICAL_ITEM: &str = "Physical Item";

pub const EXHIBIT_TYPES: &[&str] = &[
    EXHIBIT_TYPE_DOCUMENT,
    EXHIBIT_TYPE_OVERSIZED_DOCUMENT,
    EXHIBIT_TYPE_PHOTOGRAPH,
    EXHIBIT_TYPE_RECORDING,
    EXHIBIT_TYPE_PHYSICAL_ITEM,
];

pub const DISCOVERY_REQUEST_TYPE: &str = "Discovery Request";

pub const DISCOVERY_TYPES: &[&str] = &[DISCOVERY_REQUEST_TYPE];

pub const CERTIFICATE_TYPES: &[&str] = &["Certificate of Service", "Certificate of Mailing"];

pub const PLEADING_TYPES: &[&str] = &["Petition", "Answer", "Response", "Brief"];

pub const NOTICE_TYPES: &[&str] = &[
    "Notice of Appearance",
    "Notice of Withdrawal",
    "Notice of Change of Address",
];

/// Exhibit types. Each selects a different question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhibitType {
    Document,
    OversizedDocument,
    Photograph,
    Recording,
    PhysicalItem,
}

impl ExhibitType {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s.trim() {
            EXHIBIT_TYPE_DOCUMENT => Ok(Self::Document),
            EXHIBIT_TYPE_OVERSIZED_DOCUMENT => Ok(Self::OversizedDocument),
            EXHIBIT_TYPE_PHOTOGRAPH => Ok(Self::Photograph),
            EXHIBIT_TYPE_RECORDING => Ok(Self::Recording),
            EXHIBIT_TYPE_PHYSICAL_ITEM => Ok(Self::PhysicalItem),
            "" => Err(CoreError::Validation(
                "An exhibit type must be selected".to_string(),
            )),
            other => Err(CoreError::Validation(format!(
                "Invalid exhibit type '{other}'. Must be one of: {}",
                EXHIBIT_TYPES.join(", ")
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Document => EXHIBIT_TYPE_DOCUMENT,
            Self::OversizedDocument => EXHIBIT_TYPE_OVERSIZED_DOCUMENT,
            Self::Photograph => EXHIBIT_TYPE_PHOTOGRAPH,
            Self::Recording => EXHIBIT_TYPE_RECORDING,
            Self::PhysicalItem => EXHIBIT_TYPE_PHYSICAL_ITEM,
        }
    }
}

// ---------------------------------------------------------------------------
// Draft variants
// ---------------------------------------------------------------------------

/// A request being filled in on the details tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "requestGroup", rename_all = "snake_case")]
pub enum RequestDraft {
    Motion(MotionRequest),
    Exhibit(ExhibitRequest),
    Discovery(DiscoveryRequest),
    Certificate(DescribedRequest),
    Pleading(DescribedRequest),
    Notices(DescribedRequest),
}

impl RequestDraft {
    pub fn group(&self) -> RequestGroup {
        match self {
            Self::Motion(_) => RequestGroup::Motion,
            Self::Exhibit(_) => RequestGroup::Exhibit,
            Self::Discovery(_) => RequestGroup::Discovery,
            Self::Certificate(_) => RequestGroup::Certificate,
            Self::Pleading(_) => RequestGroup::Pleading,
            Self::Notices(_) => RequestGroup::Notices,
        }
    }

    /// The second-level type shown on the selection tab.
    pub fn request_type(&self) -> &str {
        match self {
            Self::Motion(m) => &m.motion_type,
            Self::Exhibit(e) => e.exhibit_type().label(),
            Self::Discovery(_) => DISCOVERY_REQUEST_TYPE,
            Self::Certificate(d) | Self::Pleading(d) | Self::Notices(d) => &d.request_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionRequest {
    #[serde(default)]
    pub motion_type: String,
    /// The relief or outcome the filer asks for.
    #[serde(default)]
    pub outcome: String,
}

/// Certificates, pleadings and notices only ask for a description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribedRequest {
    #[serde(default)]
    pub request_type: String,
    #[serde(default)]
    pub description: String,
}

// -- Exhibits --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "exhibitType", rename_all = "snake_case")]
pub enum ExhibitRequest {
    Document(ContentScreening),
    OversizedDocument(OversizedDocument),
    Photograph(ContentScreening),
    Recording(ContentScreening),
    PhysicalItem(PhysicalItem),
}

impl ExhibitRequest {
    pub fn exhibit_type(&self) -> ExhibitType {
        match self {
            Self::Document(_) => ExhibitType::Document,
            Self::OversizedDocument(_) => ExhibitType::OversizedDocument,
            Self::Photograph(_) => ExhibitType::Photograph,
            Self::Recording(_) => ExhibitType::Recording,
            Self::PhysicalItem(_) => ExhibitType::PhysicalItem,
        }
    }

    /// An empty exhibit of the given type, as the details tab first mounts it.
    pub fn empty(exhibit_type: ExhibitType) -> Self {
        match exhibit_type {
            ExhibitType::Document => Self::Document(ContentScreening::default()),
            ExhibitType::OversizedDocument => Self::OversizedDocument(OversizedDocument::default()),
            ExhibitType::Photograph => Self::Photograph(ContentScreening::default()),
            ExhibitType::Recording => Self::Recording(ContentScreening::default()),
            ExhibitType::PhysicalItem => Self::PhysicalItem(PhysicalItem::default()),
        }
    }
}

/// Content screening questions asked for documents, photographs and
/// recordings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentScreening {
    #[serde(default)]
    pub has_inappropriate_content: Option<YesNo>,
    #[serde(default, rename = "hasPII")]
    pub has_pii: Option<YesNo>,
    #[serde(default)]
    pub has_confidential_info: Option<YesNo>,
    /// Only asked when `has_confidential_info` is yes.
    #[serde(default)]
    pub has_protective_order: Option<YesNo>,
    /// Only asked when `has_protective_order` is yes.
    #[serde(default)]
    pub protective_order_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OversizedDocument {
    #[serde(default)]
    pub document_title: String,
    #[serde(flatten)]
    pub screening: ContentScreening,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalItem {
    #[serde(default)]
    pub item_category: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub item_description: String,
    #[serde(default)]
    pub estimated_size: String,
    #[serde(default)]
    pub estimated_weight: String,
    #[serde(flatten)]
    pub hazards: HazardAnswers,
    /// Only asked when `hazards.special_handling` is yes.
    #[serde(default)]
    pub handling_description: String,
    #[serde(default)]
    pub justification: String,
    /// Reference to the uploaded photo of the item.
    #[serde(default)]
    pub photo: Option<String>,
}

/// The five hazard / handling questions for physical items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardAnswers {
    #[serde(default)]
    pub is_hazardous: Option<YesNo>,
    #[serde(default)]
    pub is_perishable: Option<YesNo>,
    #[serde(default)]
    pub is_fragile: Option<YesNo>,
    #[serde(default)]
    pub contains_biological_material: Option<YesNo>,
    #[serde(default)]
    pub special_handling: Option<YesNo>,
}

impl HazardAnswers {
    /// Field names paired with answers, in the order the form asks them.
    pub fn answers(&self) -> [(&'static str, Option<YesNo>); 5] {
        [
            ("isHazardous", self.is_hazardous),
            ("isPerishable", self.is_perishable),
            ("isFragile", self.is_fragile),
            ("containsBiologicalMaterial", self.contains_biological_material),
            ("specialHandling", self.special_handling),
        ]
    }
}

// -- Discovery --

pub const DISCOVERY_KIND_INTERROGATORIES: &str = "interrogatories";
pub const DISCOVERY_KIND_DOCUMENT_PRODUCTION: &str = "documentProduction";
pub const DISCOVERY_KIND_DEPOSITION: &str = "deposition";
pub const DISCOVERY_KIND_INSPECTION: &str = "inspection";

/// Discovery methods that can be selected within one discovery request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscoveryKind {
    Interrogatories,
    DocumentProduction,
    Deposition,
    Inspection,
}

impl DiscoveryKind {
    pub const ALL: [DiscoveryKind; 4] = [
        Self::Interrogatories,
        Self::DocumentProduction,
        Self::Deposition,
        Self::Inspection,
    ];

    /// Parse a sub-type key. Unknown keys are not selectable.
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s.trim() {
            DISCOVERY_KIND_INTERROGATORIES => Some(Self::Interrogatories),
            DISCOVERY_KIND_DOCUMENT_PRODUCTION => Some(Self::DocumentProduction),
            DISCOVERY_KIND_DEPOSITION => Some(Self::Deposition),
            DISCOVERY_KIND_INSPECTION => Some(Self::Inspection),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interrogatories => DISCOVERY_KIND_INTERROGATORIES,
            Self::DocumentProduction => DISCOVERY_KIND_DOCUMENT_PRODUCTION,
            Self::Deposition => DISCOVERY_KIND_DEPOSITION,
            Self::Inspection => DISCOVERY_KIND_INSPECTION,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Interrogatories => "Interrogatories",
            Self::DocumentProduction => "Document Production",
            Self::Deposition => "Deposition",
            Self::Inspection => "Inspection",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryRequest {
    #[serde(default)]
    pub discovery_schedule: String,
    #[serde(default)]
    pub start_date: Option<Date>,
    #[serde(default)]
    pub cutoff_date: Option<Date>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub selections: DiscoverySelections,
}

/// Sub-forms of the selected discovery methods.
///
/// A method is selected exactly when its sub-form is present; deselecting
/// drops the sub-form, so no data or validity survives for a method that is
/// no longer selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySelections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interrogatories: Option<Interrogatories>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_production: Option<DocumentProduction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposition: Option<Deposition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspection: Option<Inspection>,
}

impl DiscoverySelections {
    /// Selected methods in form order.
    pub fn selected(&self) -> Vec<DiscoveryKind> {
        DiscoveryKind::ALL
            .into_iter()
            .filter(|kind| self.is_selected(*kind))
            .collect()
    }

    pub fn is_selected(&self, kind: DiscoveryKind) -> bool {
        match kind {
            DiscoveryKind::Interrogatories => self.interrogatories.is_some(),
            DiscoveryKind::DocumentProduction => self.document_production.is_some(),
            DiscoveryKind::Deposition => self.deposition.is_some(),
            DiscoveryKind::Inspection => self.inspection.is_some(),
        }
    }

    /// Select a method with an empty sub-form. Re-selecting keeps existing
    /// data.
    pub fn select(&mut self, kind: DiscoveryKind) {
        match kind {
            DiscoveryKind::Interrogatories => {
                self.interrogatories.get_or_insert_with(Default::default);
            }
            DiscoveryKind::DocumentProduction => {
                self.document_production.get_or_insert_with(Default::default);
            }
            DiscoveryKind::Deposition => {
                self.deposition.get_or_insert_with(Default::default);
            }
            DiscoveryKind::Inspection => {
                self.inspection.get_or_insert_with(Default::default);
            }
        }
    }

    /// Deselect a method, discarding everything entered for it.
    pub fn deselect(&mut self, kind: DiscoveryKind) {
        match kind {
            DiscoveryKind::Interrogatories => self.interrogatories = None,
            DiscoveryKind::DocumentProduction => self.document_production = None,
            DiscoveryKind::Deposition => self.deposition = None,
            DiscoveryKind::Inspection => self.inspection = None,
        }
    }
}

/// Contact entry for a person named on a discovery sub-form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPerson {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl ContactPerson {
    pub fn is_complete(&self) -> bool {
        crate::types::has_text(&self.name)
            && crate::types::has_text(&self.phone)
            && crate::types::has_text(&self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interrogatories {
    #[serde(default)]
    pub people: Vec<ContactPerson>,
    #[serde(default)]
    pub receive_date: Option<Date>,
    #[serde(default)]
    pub reply_due_date: Option<Date>,
}

/// Document production has no fields of its own yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProduction {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposition {
    #[serde(default)]
    pub people: Vec<ContactPerson>,
    /// Who is to be deposed.
    #[serde(default)]
    pub deponent: String,
    /// Why the deposition is necessary.
    #[serde(default)]
    pub necessity: String,
    #[serde(default)]
    pub completion_date: Option<Date>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    /// What is to be inspected.
    #[serde(default)]
    pub inspection_subject: String,
    #[serde(default)]
    pub purpose: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
