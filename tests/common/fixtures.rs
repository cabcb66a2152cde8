//! Static region corpora used across harnesses.
//!
//! Names and codes follow the real Kemendagri numbering where they are real
//! places; the point is realistic shape, not an authoritative extract.

use wilayah::{Dataset, HierarchyRow};

use crate::common::builders::row;

/// Header in the source's native Indonesian column names.
pub const HEADER: &str = "kode_prov,nama_prov,kode_kab,kab_nama,kode_kec,kec_nama,kode_desa,desa_nama";

/// A small CSV covering two provinces. Codes are stored unpadded the way
/// spreadsheet exports drop leading zeros.
pub const CSV_SMALL: &str = "\
kode_prov,nama_prov,kode_kab,kab_nama,kode_kec,kec_nama,kode_desa,desa_nama
31,DKI JAKARTA,1,JAKARTA SELATAN,10,KEBAYORAN BARU,1,SENAYAN
31,DKI JAKARTA,1,JAKARTA SELATAN,10,KEBAYORAN BARU,2,GANDARIA UTARA
31,DKI JAKARTA,1,JAKARTA SELATAN,20,TEBET,1,MANGGARAI
31,DKI JAKARTA,2,JAKARTA TIMUR,10,JATINEGARA,1,BALI MESTER
32,JAWA BARAT,1,BOGOR,10,NANGGUNG,1,MALASARI
32,JAWA BARAT,1,BOGOR,20,CIBINONG,1,PAKANSARI
32,JAWA BARAT,79,BANJAR,10,PATARUMAN,1,BANJAR
";

/// One row under the English header aliases.
pub const CSV_ENGLISH: &str = "\
province_code,province_name,regency_code,regency_name,district_code,district_name,village_code,village_name
31,DKI JAKARTA,01,JAKARTA SELATAN,010,KEBAYORAN BARU,001,SENAYAN
";

/// A second province for reload tests.
pub const CSV_ACEH: &str = "\
kode_prov,nama_prov,kode_kab,kab_nama,kode_kec,kec_nama,kode_desa,desa_nama
11,ACEH,1,SIMEULUE,10,TEUPAH SELATAN,1,LATIUNG
";

/// Jakarta and Bogor, plus look-alike names that exercise the matching rules.
pub fn jakarta_bogor() -> Dataset {
    Dataset::from_rows(jakarta_bogor_rows())
}

pub fn jakarta_bogor_rows() -> Vec<HierarchyRow> {
    vec![
        row(["31", "01", "010", "001"], ["DKI JAKARTA", "JAKARTA SELATAN", "KEBAYORAN BARU", "SENAYAN"]),
        row(["31", "01", "010", "002"], ["DKI JAKARTA", "JAKARTA SELATAN", "KEBAYORAN BARU", "GANDARIA UTARA"]),
        row(["31", "01", "020", "001"], ["DKI JAKARTA", "JAKARTA SELATAN", "TEBET", "MANGGARAI"]),
        row(["31", "02", "010", "001"], ["DKI JAKARTA", "JAKARTA TIMUR", "JATINEGARA", "BALI MESTER"]),
        row(["32", "01", "010", "001"], ["JAWA BARAT", "BOGOR", "NANGGUNG", "MALASARI"]),
        row(["32", "01", "020", "001"], ["JAWA BARAT", "BOGOR", "CIBINONG", "PAKANSARI"]),
        row(["32", "71", "010", "001"], ["JAWA BARAT", "KOTA BOGOR", "BOGOR SELATAN", "MUARASARI"]),
        row(["32", "79", "010", "001"], ["JAWA BARAT", "BANJAR", "PATARUMAN", "BANJAR"]),
        row(["63", "03", "010", "001"], ["KALIMANTAN SELATAN", "BANJAR", "ARANIO", "JATIBARU"]),
    ]
}
