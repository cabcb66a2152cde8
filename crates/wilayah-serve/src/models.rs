//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};
use wilayah_core::{
    AncestorCodes, Cell, Criteria, Level, ProjectedRow, SearchOutcome, SearchStatus,
};

/// `GET /health` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// `GET /search` query string. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub prov: String,
    pub prov_exact: bool,
    pub kab: String,
    pub kab_exact: bool,
    pub kec: String,
    pub kec_exact: bool,
    pub desa: String,
    pub desa_exact: bool,
    pub expand: bool,
}

impl SearchParams {
    pub fn criteria(&self) -> Criteria {
        Criteria::new()
            .with(Level::Province, self.prov.as_str(), self.prov_exact)
            .with(Level::Regency, self.kab.as_str(), self.kab_exact)
            .with(Level::District, self.kec.as_str(), self.kec_exact)
            .with(Level::Village, self.desa.as_str(), self.desa_exact)
    }
}

/// `GET /{level}` query string: the text typed so far plus the codes already
/// chosen at coarser levels.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SuggestParams {
    pub query: String,
    pub prov: String,
    pub kabupaten: String,
    pub kecamatan: String,
}

impl SuggestParams {
    pub fn ancestors(&self) -> AncestorCodes {
        AncestorCodes::new(
            self.prov.as_str(),
            self.kabupaten.as_str(),
            self.kecamatan.as_str(),
        )
    }
}

/// A displayed code + name, with highlight spans as `[start, end)` byte
/// offsets into `name`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellBody {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlight: Vec<[usize; 2]>,
}

impl From<&Cell> for CellBody {
    fn from(cell: &Cell) -> Self {
        Self {
            code: cell.code.clone(),
            name: cell.name.clone(),
            highlight: cell.highlight.iter().map(|r| [r.start, r.end]).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<CellBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regency: Option<CellBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<CellBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<CellBody>,
    /// Codes ready to paste into a spreadsheet.
    pub clipboard: String,
}

impl From<&ProjectedRow> for RowBody {
    fn from(row: &ProjectedRow) -> Self {
        let cell = |level| row.cell(level).map(CellBody::from);
        Self {
            province: cell(Level::Province),
            regency: cell(Level::Regency),
            district: cell(Level::District),
            village: cell(Level::Village),
            clipboard: row.clipboard_text(),
        }
    }
}

/// `GET /search` response. Only `status` is present unless it is `success`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: SearchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<RowBody>>,
    /// Level an `expand=true` request would add, for the caller's toggle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_hint: Option<Level>,
}

impl SearchResponse {
    pub fn new(outcome: &SearchOutcome, criteria: &Criteria) -> Self {
        let mut response = Self {
            status: outcome.status(),
            view_level: None,
            total: None,
            truncated: None,
            limit: None,
            rows: None,
            expand_hint: None,
        };
        if let SearchOutcome::Found(projection) = outcome {
            response.view_level = Some(projection.view_level.depth());
            response.total = Some(projection.total_before_limit);
            response.truncated = Some(projection.truncated);
            response.limit = Some(projection.limit);
            response.rows = Some(projection.rows.iter().map(RowBody::from).collect());
            response.expand_hint = criteria.expansion_target();
        }
        response
    }
}
