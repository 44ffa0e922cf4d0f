//! Built-in registration group snapshot
//!
//! Compiled-in copy of the range message, used whenever no document on disk
//! can be read. The literal below is already in table shape (bounds truncated
//! to their rule length, zero-length rules left out) and is never parsed.
//! `tests/fixtures/RangeMessage.xml` carries an excerpt of the same rules in
//! document form and the two are checked against each other.

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::domain::{GroupEntry, Prefix, Range, RangeMetadata, RangeSource, RangeTable};

/// Identifier of this snapshot. Local to this crate, not an agency message serial.
pub const BUILTIN_SERIAL: &str = "isbn-ranges-builtin-2025-10-06";
pub const BUILTIN_DATE: &str = "Mon, 6 Oct 2025 00:00:00 UTC";

type BuiltinGroup = (Prefix, &'static str, &'static str, &'static [(&'static str, &'static str)]);

static BUILTIN: Lazy<Arc<RangeTable>> = Lazy::new(|| Arc::new(build()));

/// Shared handle to the built-in table. Built on first use.
pub fn builtin_table() -> Arc<RangeTable> {
    Arc::clone(&BUILTIN)
}

fn build() -> RangeTable {
    let mut metadata = RangeMetadata::new(RangeSource::BuiltIn);
    metadata.serial = Some(BUILTIN_SERIAL.to_string());
    metadata.date = Some(BUILTIN_DATE.to_string());

    let mut table = RangeTable::new(metadata);
    for (prefix, code, agency, ranges) in GROUPS {
        let entry = GroupEntry {
            agency: (*agency).to_string(),
            ranges: ranges.iter().map(|(low, high)| Range::new(*low, *high)).collect(),
        };
        table.insert(*prefix, *code, entry);
    }
    table
}

#[rustfmt::skip]
static GROUPS: &[BuiltinGroup] = &[
    (Prefix::Isbn978, "0", "English language", &[
        ("00", "19"), ("200", "227"), ("2280", "2289"), ("229", "368"), ("3690", "3699"),
        ("370", "638"), ("6390", "6397"), ("6398000", "6399999"), ("640", "644"),
        ("6450000", "6459999"), ("646", "647"), ("6480000", "6489999"), ("649", "654"),
        ("6550", "6559"), ("656", "699"), ("7000", "8499"), ("85000", "89999"),
        ("900000", "949999"), ("9500000", "9999999"),
    ]),
    (Prefix::Isbn978, "1", "English language", &[
        ("00", "09"), ("100", "397"), ("3980", "5499"), ("55000", "64999"), ("6500", "6799"),
        ("68000", "68599"), ("6860", "7139"), ("714", "716"), ("7170", "7319"),
        ("7320000", "7399999"), ("74000", "77499"), ("7750000", "7753999"), ("77540", "77639"),
        ("7764000", "7764999"), ("77650", "77699"), ("7770000", "7782999"), ("77830", "78999"),
        ("7900", "7999"), ("80000", "83799"), ("8380000", "8384999"), ("83850", "86719"),
        ("8672", "8675"), ("86760", "86979"), ("869800", "915999"), ("9160000", "9165059"),
        ("916506", "916869"), ("9168700", "9169079"), ("916908", "919599"), ("9196000", "9196549"),
        ("919655", "972999"), ("9730", "9877"), ("987800", "991149"), ("9911500", "9911999"),
        ("991200", "998989"), ("9989900", "9999999"),
    ]),
    (Prefix::Isbn978, "2", "French language", &[
        ("00", "19"), ("200", "349"), ("35000", "39999"), ("400", "486"), ("487000", "494999"),
        ("495", "495"), ("4960", "4966"), ("49670", "49699"), ("497", "527"), ("5280", "5299"),
        ("530", "639"), ("6400000", "6429999"), ("643", "699"), ("7000", "8399"),
        ("84000", "89999"), ("900000", "919799"), ("91980", "91980"), ("919810", "919942"),
        ("9199430", "9199689"), ("919969", "949999"), ("9500000", "9999999"),
    ]),
    (Prefix::Isbn978, "3", "German language", &[
        ("00", "02"), ("030", "033"), ("0340", "0369"), ("03700", "03999"), ("04", "19"),
        ("200", "699"), ("7000", "8499"), ("85000", "89999"), ("900000", "949999"),
        ("9500000", "9539999"), ("95400", "96999"), ("9700000", "9849999"), ("98500", "99999"),
    ]),
    (Prefix::Isbn978, "4", "Japan", &[
        ("00", "19"), ("200", "699"), ("7000", "8499"), ("85000", "89999"), ("900000", "949999"),
        ("9500000", "9999999"),
    ]),
    (Prefix::Isbn978, "5", "former U.S.S.R", &[
        ("00000", "00499"), ("0050", "0099"), ("01", "19"), ("200", "361"), ("3620", "3623"),
        ("3624000", "3629999"), ("363", "420"), ("4210", "4299"), ("430", "430"), ("4310", "4399"),
        ("440", "440"), ("4410", "4499"), ("450", "603"), ("6040000", "6049999"), ("605", "699"),
        ("7000", "8499"), ("85000", "89999"), ("900000", "909999"), ("91000", "91999"),
        ("9200", "9299"), ("93000", "94999"), ("9500000", "9500999"), ("9501", "9799"),
        ("98000", "98999"), ("9900000", "9909999"), ("9910", "9999"),
    ]),
    (Prefix::Isbn978, "600", "Iran", &[
        ("00", "09"), ("100", "499"), ("5000", "8999"), ("90000", "98679"), ("9868", "9929"),
        ("993", "995"), ("99600", "99999"),
    ]),
    (Prefix::Isbn978, "601", "Kazakhstan", &[
        ("00", "19"), ("200", "699"), ("7000", "7999"), ("80000", "84999"), ("85", "99"),
    ]),
    (Prefix::Isbn978, "602", "Indonesia", &[
        ("00", "07"), ("0800", "0899"), ("0900", "1099"), ("1100", "1199"), ("1200", "1399"),
        ("14000", "14999"), ("1500", "1699"), ("17000", "19999"), ("200", "499"),
        ("50000", "53999"), ("5400", "5999"), ("60000", "61999"), ("6200", "6999"),
        ("70000", "74999"), ("7500", "9499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "603", "Saudi Arabia", &[
        ("00", "04"), ("05", "49"), ("500", "799"), ("8000", "8999"), ("90000", "99999"),
    ]),
    (Prefix::Isbn978, "604", "Vietnam", &[
        ("0", "2"), ("300", "399"), ("40", "46"), ("470", "497"), ("4980", "4999"), ("50", "89"),
        ("900", "979"), ("9800", "9999"),
    ]),
    (Prefix::Isbn978, "605", "Türkiye", &[
        ("00", "02"), ("030", "039"), ("04", "05"), ("06000", "06999"), ("07", "09"),
        ("100", "199"), ("2000", "2399"), ("240", "399"), ("4000", "5999"), ("60000", "74999"),
        ("7500", "7999"), ("80000", "89999"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "606", "Romania", &[
        ("000", "089"), ("09", "49"), ("500", "799"), ("8000", "9099"), ("910", "919"),
        ("92000", "95999"), ("9600", "9749"), ("975", "999"),
    ]),
    (Prefix::Isbn978, "607", "Mexico", &[
        ("00", "39"), ("400", "592"), ("59300", "59999"), ("600", "749"), ("7500", "9499"),
        ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "608", "North Macedonia", &[
        ("0", "0"), ("10", "19"), ("200", "449"), ("4500", "6499"), ("65000", "69999"), ("7", "9"),
    ]),
    (Prefix::Isbn978, "609", "Lithuania", &[
        ("00", "39"), ("400", "799"), ("8000", "9499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "611", "Thailand", &[]),
    (Prefix::Isbn978, "612", "Peru", &[
        ("00", "29"), ("300", "399"), ("4000", "4499"), ("45000", "49999"), ("50", "99"),
    ]),
    (Prefix::Isbn978, "613", "Mauritius", &[("0", "9")]),
    (Prefix::Isbn978, "614", "Lebanon", &[
        ("00", "39"), ("400", "799"), ("8000", "9499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "615", "Hungary", &[
        ("00", "09"), ("100", "499"), ("5000", "7999"), ("80000", "89999"),
    ]),
    (Prefix::Isbn978, "616", "Thailand", &[
        ("00", "19"), ("200", "699"), ("7000", "8999"), ("90000", "99999"),
    ]),
    (Prefix::Isbn978, "617", "Ukraine", &[
        ("00", "49"), ("500", "699"), ("7000", "8999"), ("90000", "99999"),
    ]),
    (Prefix::Isbn978, "618", "Greece", &[
        ("00", "19"), ("200", "499"), ("5000", "7999"), ("80000", "99999"),
    ]),
    (Prefix::Isbn978, "619", "Bulgaria", &[
        ("00", "14"), ("150", "699"), ("7000", "8999"), ("90000", "99999"),
    ]),
    (Prefix::Isbn978, "620", "Mauritius", &[("0", "9")]),
    (Prefix::Isbn978, "621", "Philippines", &[
        ("00", "29"), ("400", "599"), ("8000", "8999"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "622", "Iran", &[
        ("00", "10"), ("200", "459"), ("4600", "8749"), ("87500", "99999"),
    ]),
    (Prefix::Isbn978, "623", "Indonesia", &[
        ("00", "10"), ("110", "524"), ("5250", "8799"), ("88000", "99999"),
    ]),
    (Prefix::Isbn978, "624", "Sri Lanka", &[
        ("00", "04"), ("200", "249"), ("5000", "6699"), ("93000", "99999"),
    ]),
    (Prefix::Isbn978, "625", "Türkiye", &[
        ("00", "01"), ("365", "442"), ("44300", "44499"), ("445", "449"), ("6350", "7793"),
        ("77940", "77949"), ("7795", "8499"), ("94000", "99999"),
    ]),
    (Prefix::Isbn978, "626", "Taiwan", &[
        ("00", "04"), ("300", "499"), ("7000", "7999"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "627", "Pakistan", &[
        ("30", "31"), ("500", "524"), ("7500", "7999"), ("94500", "94649"),
    ]),
    (Prefix::Isbn978, "628", "Colombia", &[
        ("00", "09"), ("500", "549"), ("7500", "8499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "629", "Malaysia", &[
        ("00", "02"), ("460", "499"), ("7500", "7999"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "630", "Romania", &[("300", "349"), ("6500", "6849")]),
    (Prefix::Isbn978, "631", "Argentina", &[
        ("00", "09"), ("300", "399"), ("6500", "7499"), ("90000", "99999"),
    ]),
    (Prefix::Isbn978, "65", "Brazil", &[
        ("00", "01"), ("250", "299"), ("300", "302"), ("5000", "5129"), ("5350", "6149"),
        ("80000", "81824"), ("83000", "89999"), ("900000", "902449"), ("980000", "999999"),
    ]),
    (Prefix::Isbn978, "7", "China, People's Republic", &[
        ("00", "09"), ("100", "499"), ("5000", "7999"), ("80000", "89999"), ("900000", "999999"),
    ]),
    (Prefix::Isbn978, "80", "former Czechoslovakia", &[
        ("00", "19"), ("200", "529"), ("53000", "54999"), ("550", "689"), ("69000", "69999"),
        ("7000", "8499"), ("85000", "89999"), ("900000", "998999"), ("99900", "99999"),
    ]),
    (Prefix::Isbn978, "81", "India", &[
        ("00", "18"), ("19000", "19999"), ("200", "699"), ("7000", "8499"), ("85000", "89999"),
        ("900000", "999999"),
    ]),
    (Prefix::Isbn978, "82", "Norway", &[
        ("00", "19"), ("200", "689"), ("690000", "699999"), ("7000", "8999"), ("90000", "98999"),
        ("990000", "999999"),
    ]),
    (Prefix::Isbn978, "83", "Poland", &[
        ("00", "19"), ("200", "599"), ("60000", "69999"), ("7000", "8499"), ("85000", "89999"),
        ("900000", "999999"),
    ]),
    (Prefix::Isbn978, "84", "Spain", &[
        ("00", "13"), ("140", "149"), ("15000", "19999"), ("200", "699"), ("7000", "8499"),
        ("85000", "89999"), ("9000", "9199"), ("920000", "923999"), ("92400", "92999"),
        ("930000", "949999"), ("95000", "96999"), ("9700", "9999"),
    ]),
    (Prefix::Isbn978, "85", "Brazil", &[
        ("00", "19"), ("200", "454"), ("455000", "455299"), ("45530", "45599"), ("456", "528"),
        ("52900", "53199"), ("5320", "5339"), ("534", "539"), ("54000", "54029"),
        ("54030", "54039"), ("540400", "540499"), ("54050", "54089"), ("540900", "540999"),
        ("54100", "54399"), ("5440", "5479"), ("54800", "54999"), ("5500", "5999"),
        ("60000", "69999"), ("7000", "8499"), ("85000", "89999"), ("900000", "924999"),
        ("92500", "94499"), ("9450", "9599"), ("96", "97"), ("98000", "99999"),
    ]),
    (Prefix::Isbn978, "86", "former Yugoslavia", &[
        ("00", "29"), ("300", "599"), ("6000", "7999"), ("80000", "89999"), ("900000", "999999"),
    ]),
    (Prefix::Isbn978, "87", "Denmark", &[
        ("00", "29"), ("400", "649"), ("7000", "7999"), ("85000", "94999"), ("970000", "999999"),
    ]),
    (Prefix::Isbn978, "88", "Italy", &[
        ("00", "19"), ("200", "311"), ("31200", "31499"), ("315", "318"), ("31900", "32299"),
        ("323", "326"), ("3270", "3389"), ("339", "360"), ("3610", "3629"), ("363", "548"),
        ("5490", "5549"), ("555", "599"), ("6000", "8499"), ("85000", "89999"),
        ("900000", "909999"), ("910", "926"), ("9270", "9399"), ("940000", "947999"),
        ("94800", "99999"),
    ]),
    (Prefix::Isbn978, "89", "Korea, Republic", &[
        ("00", "24"), ("250", "549"), ("5500", "8499"), ("85000", "94999"), ("950000", "969999"),
        ("97000", "98999"), ("990", "999"),
    ]),
    (Prefix::Isbn978, "90", "Netherlands", &[
        ("00", "19"), ("200", "499"), ("5000", "6999"), ("70000", "79999"), ("800000", "849999"),
        ("8500", "8999"), ("90", "90"), ("910000", "939999"), ("94", "94"), ("950000", "999999"),
    ]),
    (Prefix::Isbn978, "91", "Sweden", &[
        ("0", "1"), ("20", "49"), ("500", "649"), ("7000", "8199"), ("85000", "94999"),
        ("970000", "999999"),
    ]),
    (Prefix::Isbn978, "92", "International NGO Publishers and EU Organizations", &[
        ("0", "5"), ("60", "79"), ("800", "899"), ("9000", "9499"), ("95000", "98999"),
        ("990000", "999999"),
    ]),
    (Prefix::Isbn978, "93", "India", &[
        ("00", "09"), ("100", "499"), ("5000", "7999"), ("80000", "95999"), ("960000", "999999"),
    ]),
    (Prefix::Isbn978, "94", "Netherlands", &[
        ("000", "599"), ("6000", "8999"), ("90000", "99999"),
    ]),
    (Prefix::Isbn978, "950", "Argentina", &[
        ("00", "49"), ("500", "899"), ("9000", "9899"), ("99000", "99999"),
    ]),
    (Prefix::Isbn978, "951", "Finland", &[
        ("0", "1"), ("20", "54"), ("550", "889"), ("8900", "9499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "952", "Finland", &[
        ("00", "19"), ("200", "499"), ("5000", "5999"), ("60", "64"), ("65000", "65999"),
        ("6600", "6699"), ("67000", "69999"), ("7000", "7999"), ("80", "94"), ("9500", "9899"),
        ("99000", "99999"),
    ]),
    (Prefix::Isbn978, "953", "Croatia", &[
        ("0", "0"), ("10", "14"), ("150", "479"), ("48000", "49999"), ("500", "500"),
        ("50100", "50999"), ("51", "54"), ("55000", "59999"), ("6000", "9499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "954", "Bulgaria", &[
        ("00", "28"), ("2900", "2999"), ("300", "799"), ("8000", "8999"), ("90000", "92999"),
        ("9300", "9999"),
    ]),
    (Prefix::Isbn978, "955", "Sri Lanka", &[
        ("0000", "1999"), ("20", "33"), ("3400", "3549"), ("35500", "35999"), ("3600", "3799"),
        ("38000", "38999"), ("3900", "4099"), ("41000", "44999"), ("4500", "4999"),
        ("50000", "54999"), ("550", "710"), ("71100", "71499"), ("7150", "9499"),
        ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "956", "Chile", &[
        ("00", "08"), ("09000", "09999"), ("10", "19"), ("200", "599"), ("6000", "6999"),
        ("7000", "9999"),
    ]),
    (Prefix::Isbn978, "957", "Taiwan", &[
        ("00", "02"), ("0300", "0499"), ("05", "19"), ("2000", "2099"), ("21", "27"),
        ("28000", "30999"), ("31", "43"), ("440", "819"), ("8200", "9699"), ("97000", "99999"),
    ]),
    (Prefix::Isbn978, "958", "Colombia", &[
        ("00", "49"), ("500", "509"), ("5100", "5199"), ("52000", "53999"), ("5400", "5599"),
        ("56000", "59999"), ("600", "799"), ("8000", "9499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "959", "Cuba", &[
        ("00", "19"), ("200", "699"), ("7000", "8499"), ("85000", "99999"),
    ]),
    (Prefix::Isbn978, "960", "Greece", &[
        ("00", "19"), ("200", "659"), ("6600", "6899"), ("690", "699"), ("7000", "8499"),
        ("85000", "92999"), ("93", "93"), ("9400", "9799"), ("98000", "99999"),
    ]),
    (Prefix::Isbn978, "961", "Slovenia", &[
        ("00", "19"), ("200", "599"), ("6000", "8999"), ("90000", "97999"),
    ]),
    (Prefix::Isbn978, "962", "Hong Kong, China", &[
        ("00", "19"), ("200", "699"), ("70000", "84999"), ("8500", "8699"), ("8700", "8999"),
        ("900", "999"),
    ]),
    (Prefix::Isbn978, "963", "Hungary", &[
        ("00", "19"), ("200", "699"), ("7000", "8499"), ("85000", "89999"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "964", "Iran", &[
        ("00", "14"), ("150", "249"), ("2500", "2999"), ("300", "549"), ("5500", "8999"),
        ("90000", "96999"), ("970", "989"), ("9900", "9999"),
    ]),
    (Prefix::Isbn978, "965", "Israel", &[
        ("00", "19"), ("200", "599"), ("7000", "7999"), ("90000", "99999"),
    ]),
    (Prefix::Isbn978, "966", "Ukraine", &[
        ("00", "12"), ("130", "139"), ("14", "14"), ("1500", "1699"), ("170", "199"),
        ("2000", "2789"), ("279", "289"), ("2900", "2999"), ("300", "699"), ("7000", "8999"),
        ("90000", "90999"), ("910", "949"), ("95000", "97999"), ("980", "999"),
    ]),
    (Prefix::Isbn978, "967", "Malaysia", &[
        ("00", "00"), ("0100", "0999"), ("10000", "19999"), ("2000", "2499"), ("300", "499"),
        ("5000", "5999"), ("60", "89"), ("900", "989"), ("9900", "9989"), ("99900", "99999"),
    ]),
    (Prefix::Isbn978, "968", "Mexico", &[
        ("01", "39"), ("400", "499"), ("5000", "7999"), ("800", "899"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "969", "Pakistan", &[
        ("0", "1"), ("20", "20"), ("210", "219"), ("22000", "22999"), ("23", "39"), ("400", "749"),
        ("7500", "9999"),
    ]),
    (Prefix::Isbn978, "970", "Mexico", &[
        ("01", "59"), ("600", "899"), ("9000", "9099"), ("91000", "96999"), ("9700", "9999"),
    ]),
    (Prefix::Isbn978, "971", "Philippines", &[
        ("000", "015"), ("0160", "0199"), ("02", "02"), ("0300", "0599"), ("06", "49"),
        ("500", "849"), ("8500", "9099"), ("91000", "95999"), ("9600", "9699"), ("97", "98"),
        ("9900", "9999"),
    ]),
    (Prefix::Isbn978, "972", "Portugal", &[
        ("0", "1"), ("20", "54"), ("550", "799"), ("8000", "9499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "973", "Romania", &[
        ("0", "0"), ("100", "169"), ("1700", "1999"), ("20", "54"), ("550", "759"),
        ("7600", "8499"), ("85000", "88999"), ("8900", "9499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "974", "Thailand", &[
        ("00", "19"), ("200", "699"), ("7000", "8499"), ("85000", "89999"), ("90000", "94999"),
        ("9500", "9999"),
    ]),
    (Prefix::Isbn978, "975", "Türkiye", &[
        ("00000", "01999"), ("02", "23"), ("2400", "2499"), ("250", "599"), ("6000", "9199"),
        ("92000", "98999"), ("990", "999"),
    ]),
    (Prefix::Isbn978, "976", "Caribbean Community", &[
        ("0", "3"), ("40", "59"), ("600", "799"), ("8000", "9499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "977", "Egypt", &[
        ("00", "19"), ("200", "499"), ("5000", "6999"), ("700", "849"), ("85000", "88999"),
        ("89", "89"), ("900", "949"), ("95000", "96999"), ("970", "999"),
    ]),
    (Prefix::Isbn978, "978", "Nigeria", &[
        ("000", "199"), ("2000", "2999"), ("30000", "69999"), ("700", "799"), ("8000", "8999"),
        ("900", "999"),
    ]),
    (Prefix::Isbn978, "979", "Indonesia", &[
        ("000", "099"), ("1000", "1499"), ("15000", "19999"), ("20", "29"), ("3000", "3999"),
        ("400", "799"), ("8000", "9499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "980", "Venezuela", &[("00", "19"), ("200", "599"), ("6000", "9999")]),
    (Prefix::Isbn978, "981", "Singapore", &[
        ("00", "16"), ("17000", "17999"), ("18", "19"), ("200", "299"), ("3000", "3099"),
        ("310", "399"), ("4000", "9999"),
    ]),
    (Prefix::Isbn978, "982", "South Pacific", &[
        ("00", "09"), ("100", "699"), ("70", "89"), ("9000", "9799"), ("98000", "99999"),
    ]),
    (Prefix::Isbn978, "983", "Malaysia", &[
        ("00", "01"), ("020", "199"), ("2000", "3999"), ("40000", "44999"), ("45", "49"),
        ("50", "79"), ("800", "899"), ("9000", "9899"), ("99000", "99999"),
    ]),
    (Prefix::Isbn978, "984", "Bangladesh", &[
        ("00", "39"), ("400", "799"), ("8000", "8999"), ("90000", "99999"),
    ]),
    (Prefix::Isbn978, "985", "Belarus", &[
        ("00", "39"), ("400", "599"), ("6000", "8799"), ("880", "899"), ("90000", "99999"),
    ]),
    (Prefix::Isbn978, "986", "Taiwan", &[
        ("00", "05"), ("06000", "06999"), ("0700", "0799"), ("08", "11"), ("120", "539"),
        ("5400", "7999"), ("80000", "99999"),
    ]),
    (Prefix::Isbn978, "987", "Argentina", &[
        ("00", "09"), ("1000", "1999"), ("20000", "29999"), ("30", "35"), ("3600", "4199"),
        ("42", "43"), ("4400", "4499"), ("45000", "48999"), ("4900", "4999"), ("500", "824"),
        ("8250", "8279"), ("82800", "82999"), ("8300", "8499"), ("85", "88"), ("8900", "9499"),
        ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "988", "Hong Kong, China", &[
        ("00", "11"), ("12000", "19999"), ("200", "699"), ("70000", "79999"), ("8000", "9699"),
        ("97000", "99999"),
    ]),
    (Prefix::Isbn978, "989", "Portugal", &[
        ("0", "1"), ("20", "34"), ("35000", "36999"), ("37", "52"), ("53000", "54999"),
        ("550", "799"), ("8000", "9499"), ("95000", "99999"),
    ]),
    (Prefix::Isbn978, "9910", "Uzbekistan", &[("01", "08"), ("650", "799"), ("8000", "9999")]),
    (Prefix::Isbn978, "9911", "Montenegro", &[("20", "24"), ("550", "749")]),
    (Prefix::Isbn978, "9912", "Tanzania", &[("40", "44"), ("750", "799")]),
    (Prefix::Isbn978, "9913", "Uganda", &[("00", "07"), ("600", "699"), ("9550", "9999")]),
    (Prefix::Isbn978, "9914", "Kenya", &[("35", "55"), ("700", "774"), ("9450", "9999")]),
    (Prefix::Isbn978, "9915", "Uruguay", &[("40", "59"), ("650", "799"), ("9300", "9999")]),
    (Prefix::Isbn978, "9916", "Estonia", &[
        ("0", "0"), ("10", "39"), ("4", "4"), ("600", "789"), ("79", "79"), ("800", "899"),
        ("9250", "9999"),
    ]),
    (Prefix::Isbn978, "9917", "Bolivia", &[
        ("0", "0"), ("30", "34"), ("600", "699"), ("9700", "9999"),
    ]),
    (Prefix::Isbn978, "9918", "Malta", &[
        ("0", "0"), ("20", "29"), ("600", "799"), ("9500", "9999"),
    ]),
    (Prefix::Isbn978, "9919", "Mongolia", &[
        ("0", "0"), ("20", "29"), ("500", "599"), ("9500", "9999"),
    ]),
    (Prefix::Isbn978, "9920", "Andorra", &[("30", "42"), ("500", "799"), ("8750", "9999")]),
    (Prefix::Isbn978, "9921", "Kuwait", &[
        ("0", "0"), ("30", "39"), ("700", "899"), ("9700", "9999"),
    ]),
    (Prefix::Isbn978, "9922", "Iraq", &[("20", "29"), ("600", "799"), ("8500", "9999")]),
    (Prefix::Isbn978, "9923", "Jordan", &[
        ("0", "0"), ("10", "69"), ("700", "899"), ("9400", "9999"),
    ]),
    (Prefix::Isbn978, "9924", "Cambodia", &[("30", "39"), ("500", "649"), ("9000", "9999")]),
    (Prefix::Isbn978, "9925", "Cyprus", &[
        ("0", "2"), ("30", "54"), ("550", "734"), ("7350", "9999"),
    ]),
    (Prefix::Isbn978, "9926", "Bosnia and Herzegovina", &[
        ("0", "1"), ("20", "39"), ("400", "799"), ("8000", "9999"),
    ]),
    (Prefix::Isbn978, "9927", "Qatar", &[("00", "09"), ("100", "399"), ("4000", "4999")]),
    (Prefix::Isbn978, "9928", "Albania", &[("00", "09"), ("100", "399"), ("4000", "4999")]),
    (Prefix::Isbn978, "9929", "Guatemala", &[
        ("0", "3"), ("40", "54"), ("550", "799"), ("8000", "9999"),
    ]),
    (Prefix::Isbn978, "9930", "Costa Rica", &[("00", "49"), ("500", "939"), ("9400", "9999")]),
    (Prefix::Isbn978, "9931", "Algeria", &[("00", "29"), ("300", "899"), ("9000", "9999")]),
    (Prefix::Isbn978, "9932", "Lao People's Democratic Republic", &[
        ("00", "39"), ("400", "849"), ("8500", "9999"),
    ]),
    (Prefix::Isbn978, "9933", "Syria", &[
        ("0", "0"), ("10", "39"), ("400", "899"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "9934", "Latvia", &[
        ("0", "0"), ("10", "49"), ("500", "799"), ("8000", "9999"),
    ]),
    (Prefix::Isbn978, "9935", "Iceland", &[
        ("0", "0"), ("10", "39"), ("400", "899"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "9936", "Afghanistan", &[
        ("0", "1"), ("20", "39"), ("400", "799"), ("8000", "9999"),
    ]),
    (Prefix::Isbn978, "9937", "Nepal", &[
        ("0", "2"), ("30", "49"), ("500", "799"), ("8000", "9999"),
    ]),
    (Prefix::Isbn978, "9938", "Tunisia", &[("00", "79"), ("800", "949"), ("9500", "9999")]),
    (Prefix::Isbn978, "9939", "Armenia", &[
        ("0", "4"), ("50", "79"), ("800", "899"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "9940", "Montenegro", &[
        ("0", "1"), ("20", "49"), ("500", "839"), ("84", "86"), ("8700", "9999"),
    ]),
    (Prefix::Isbn978, "9941", "Georgia", &[
        ("0", "0"), ("1", "3"), ("40", "79"), ("8", "8"), ("900", "999"),
    ]),
    (Prefix::Isbn978, "9942", "Ecuador", &[
        ("00", "59"), ("600", "699"), ("7000", "7499"), ("750", "849"), ("8500", "8999"),
        ("900", "984"), ("9850", "9999"),
    ]),
    (Prefix::Isbn978, "9943", "Uzbekistan", &[
        ("00", "29"), ("300", "399"), ("4000", "9749"), ("975", "999"),
    ]),
    (Prefix::Isbn978, "9944", "Türkiye", &[
        ("0000", "0999"), ("100", "499"), ("5000", "5999"), ("60", "69"), ("700", "799"),
        ("80", "89"), ("900", "999"),
    ]),
    (Prefix::Isbn978, "9945", "Dominican Republic", &[
        ("00", "00"), ("010", "079"), ("08", "39"), ("400", "569"), ("57", "57"), ("580", "799"),
        ("80", "80"), ("810", "849"), ("8500", "9999"),
    ]),
    (Prefix::Isbn978, "9946", "Korea, P.D.R.", &[
        ("0", "1"), ("20", "39"), ("400", "899"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "9947", "Algeria", &[("0", "1"), ("20", "79"), ("800", "999")]),
    (Prefix::Isbn978, "9948", "United Arab Emirates", &[
        ("00", "39"), ("400", "849"), ("8500", "9999"),
    ]),
    (Prefix::Isbn978, "9949", "Estonia", &[
        ("00", "08"), ("090", "099"), ("10", "39"), ("400", "749"), ("75", "89"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "9950", "Palestine", &[("00", "29"), ("300", "849"), ("8500", "9999")]),
    (Prefix::Isbn978, "9951", "Kosova", &[
        ("00", "38"), ("390", "849"), ("8500", "9799"), ("980", "999"),
    ]),
    (Prefix::Isbn978, "9952", "Azerbaijan", &[
        ("0", "1"), ("20", "39"), ("4000", "4999"), ("50", "79"), ("800", "999"),
    ]),
    (Prefix::Isbn978, "9953", "Lebanon", &[
        ("0", "0"), ("10", "39"), ("400", "599"), ("60", "89"), ("9000", "9299"), ("93", "96"),
        ("970", "999"),
    ]),
    (Prefix::Isbn978, "9954", "Morocco", &[
        ("0", "1"), ("20", "39"), ("400", "799"), ("8000", "9899"), ("99", "99"),
    ]),
    (Prefix::Isbn978, "9955", "Lithuania", &[("00", "39"), ("400", "929"), ("9300", "9999")]),
    (Prefix::Isbn978, "9956", "Cameroon", &[
        ("0", "0"), ("10", "39"), ("400", "899"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "9957", "Jordan", &[
        ("00", "39"), ("400", "649"), ("65", "67"), ("680", "699"), ("70", "84"), ("8500", "8799"),
        ("88", "99"),
    ]),
    (Prefix::Isbn978, "9958", "Bosnia and Herzegovina", &[
        ("00", "01"), ("020", "029"), ("0300", "0399"), ("040", "089"), ("0900", "0999"),
        ("10", "18"), ("1900", "1999"), ("20", "49"), ("500", "899"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "9959", "Libya", &[
        ("0", "1"), ("20", "79"), ("800", "949"), ("9500", "9699"), ("970", "979"), ("98", "99"),
    ]),
    (Prefix::Isbn978, "9960", "Saudi Arabia", &[("00", "59"), ("600", "899"), ("9000", "9999")]),
    (Prefix::Isbn978, "9961", "Algeria", &[
        ("0", "2"), ("30", "69"), ("700", "949"), ("9500", "9999"),
    ]),
    (Prefix::Isbn978, "9962", "Panama", &[
        ("00", "54"), ("5500", "5599"), ("56", "59"), ("600", "849"), ("8500", "9999"),
    ]),
    (Prefix::Isbn978, "9963", "Cyprus", &[
        ("0", "1"), ("2000", "2499"), ("250", "279"), ("2800", "2999"), ("30", "54"),
        ("550", "734"), ("7350", "7499"), ("7500", "9999"),
    ]),
    (Prefix::Isbn978, "9964", "Ghana", &[("0", "6"), ("70", "94"), ("950", "999")]),
    (Prefix::Isbn978, "9965", "Kazakhstan", &[("00", "39"), ("400", "899"), ("9000", "9999")]),
    (Prefix::Isbn978, "9966", "Kenya", &[
        ("000", "139"), ("14", "14"), ("1500", "1999"), ("20", "69"), ("7000", "7499"),
        ("750", "820"), ("8210", "8249"), ("825", "825"), ("8260", "8289"), ("829", "959"),
        ("9600", "9999"),
    ]),
    (Prefix::Isbn978, "9967", "Kyrgyz Republic", &[
        ("00", "39"), ("400", "899"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "9968", "Costa Rica", &[("00", "49"), ("500", "939"), ("9400", "9999")]),
    (Prefix::Isbn978, "9970", "Uganda", &[("00", "39"), ("400", "899"), ("9000", "9999")]),
    (Prefix::Isbn978, "9971", "Singapore", &[
        ("0", "5"), ("60", "89"), ("900", "989"), ("9900", "9999"),
    ]),
    (Prefix::Isbn978, "9972", "Peru", &[
        ("00", "09"), ("1", "1"), ("200", "249"), ("2500", "2999"), ("30", "59"), ("600", "899"),
        ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "9973", "Tunisia", &[
        ("00", "05"), ("060", "089"), ("0900", "0999"), ("10", "69"), ("700", "969"),
        ("9700", "9999"),
    ]),
    (Prefix::Isbn978, "9974", "Uruguay", &[
        ("0", "2"), ("30", "54"), ("550", "749"), ("7500", "9099"), ("910", "949"), ("95", "99"),
    ]),
    (Prefix::Isbn978, "9975", "Moldova", &[
        ("0", "0"), ("100", "299"), ("3000", "3999"), ("4000", "4499"), ("45", "89"),
        ("900", "949"), ("9500", "9999"),
    ]),
    (Prefix::Isbn978, "9976", "Tanzania", &[
        ("0", "4"), ("50", "89"), ("900", "989"), ("9900", "9999"),
    ]),
    (Prefix::Isbn978, "9977", "Costa Rica", &[("00", "89"), ("900", "989"), ("9900", "9999")]),
    (Prefix::Isbn978, "9978", "Ecuador", &[
        ("00", "29"), ("300", "399"), ("40", "94"), ("950", "989"), ("9900", "9999"),
    ]),
    (Prefix::Isbn978, "9979", "Iceland", &[
        ("0", "4"), ("50", "64"), ("650", "659"), ("66", "75"), ("760", "899"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "9980", "Papua New Guinea", &[
        ("0", "3"), ("40", "89"), ("900", "989"), ("9900", "9999"),
    ]),
    (Prefix::Isbn978, "9981", "Morocco", &[
        ("00", "09"), ("100", "159"), ("1600", "1999"), ("20", "79"), ("800", "949"),
        ("9500", "9999"),
    ]),
    (Prefix::Isbn978, "9982", "Zambia", &[("00", "79"), ("800", "989"), ("9900", "9999")]),
    (Prefix::Isbn978, "9983", "Gambia", &[("80", "94"), ("950", "989"), ("9900", "9999")]),
    (Prefix::Isbn978, "9984", "Latvia", &[("00", "49"), ("500", "899"), ("9000", "9999")]),
    (Prefix::Isbn978, "9985", "Estonia", &[
        ("0", "4"), ("50", "79"), ("800", "899"), ("9000", "9999"),
    ]),
    (Prefix::Isbn978, "9986", "Lithuania", &[
        ("00", "39"), ("400", "899"), ("9000", "9399"), ("940", "969"), ("97", "99"),
    ]),
    (Prefix::Isbn978, "9987", "Tanzania", &[("00", "39"), ("400", "879"), ("8800", "9999")]),
    (Prefix::Isbn978, "9988", "Ghana", &[
        ("0", "3"), ("40", "54"), ("550", "749"), ("7500", "9999"),
    ]),
    (Prefix::Isbn978, "9989", "North Macedonia", &[
        ("0", "0"), ("100", "199"), ("2000", "2999"), ("30", "59"), ("600", "949"),
        ("9500", "9999"),
    ]),
    (Prefix::Isbn978, "99901", "Bahrain", &[("00", "49"), ("500", "799"), ("80", "99")]),
    (Prefix::Isbn978, "99902", "Reserved Agency", &[]),
    (Prefix::Isbn978, "99903", "Mauritius", &[("0", "1"), ("20", "89"), ("900", "999")]),
    (Prefix::Isbn978, "99904", "Curaçao", &[("0", "5"), ("60", "89"), ("900", "999")]),
    (Prefix::Isbn978, "99905", "Bolivia", &[("0", "3"), ("40", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99906", "Kuwait", &[
        ("0", "2"), ("30", "59"), ("600", "699"), ("70", "89"), ("90", "94"), ("950", "999"),
    ]),
    (Prefix::Isbn978, "99908", "Malawi", &[("0", "0"), ("10", "89"), ("900", "999")]),
    (Prefix::Isbn978, "99909", "Malta", &[("0", "3"), ("40", "94"), ("950", "999")]),
    (Prefix::Isbn978, "99910", "Sierra Leone", &[("0", "2"), ("30", "89"), ("900", "999")]),
    (Prefix::Isbn978, "99911", "Lesotho", &[("00", "59"), ("600", "999")]),
    (Prefix::Isbn978, "99912", "Botswana", &[
        ("0", "3"), ("400", "599"), ("60", "89"), ("900", "999"),
    ]),
    (Prefix::Isbn978, "99913", "Andorra", &[("0", "2"), ("30", "35"), ("600", "604")]),
    (Prefix::Isbn978, "99914", "International NGO Publishers", &[
        ("0", "4"), ("50", "89"), ("900", "999"),
    ]),
    (Prefix::Isbn978, "99915", "Maldives", &[("0", "4"), ("50", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99916", "Namibia", &[("0", "2"), ("30", "69"), ("700", "999")]),
    (Prefix::Isbn978, "99917", "Brunei Darussalam", &[("0", "2"), ("30", "89"), ("900", "999")]),
    (Prefix::Isbn978, "99918", "Faroe Islands", &[("0", "3"), ("40", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99919", "Benin", &[
        ("0", "2"), ("300", "399"), ("40", "79"), ("800", "999"),
    ]),
    (Prefix::Isbn978, "99920", "Andorra", &[("0", "4"), ("50", "89"), ("900", "999")]),
    (Prefix::Isbn978, "99921", "Qatar", &[
        ("0", "1"), ("20", "69"), ("700", "799"), ("8", "8"), ("90", "99"),
    ]),
    (Prefix::Isbn978, "99922", "Guatemala", &[("0", "3"), ("40", "69"), ("700", "999")]),
    (Prefix::Isbn978, "99923", "El Salvador", &[("0", "1"), ("20", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99924", "Nicaragua", &[("0", "1"), ("20", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99925", "Paraguay", &[("0", "3"), ("40", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99926", "Honduras", &[
        ("0", "0"), ("10", "59"), ("600", "869"), ("87", "89"), ("90", "99"),
    ]),
    (Prefix::Isbn978, "99927", "Albania", &[("0", "2"), ("30", "59"), ("600", "999")]),
    (Prefix::Isbn978, "99928", "Georgia", &[("0", "0"), ("10", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99929", "Mongolia", &[("0", "4"), ("50", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99930", "Armenia", &[("0", "4"), ("50", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99931", "Seychelles", &[("0", "4"), ("50", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99932", "Malta", &[
        ("0", "0"), ("10", "59"), ("600", "699"), ("7", "7"), ("80", "99"),
    ]),
    (Prefix::Isbn978, "99933", "Nepal", &[("0", "2"), ("30", "59"), ("600", "999")]),
    (Prefix::Isbn978, "99934", "Dominican Republic", &[("0", "1"), ("20", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99935", "Haiti", &[
        ("0", "2"), ("30", "59"), ("600", "699"), ("7", "8"), ("90", "99"),
    ]),
    (Prefix::Isbn978, "99936", "Bhutan", &[("0", "0"), ("10", "59"), ("600", "999")]),
    (Prefix::Isbn978, "99937", "Macau", &[("0", "1"), ("20", "59"), ("600", "999")]),
    (Prefix::Isbn978, "99938", "Srpska, Republic of", &[
        ("0", "1"), ("20", "59"), ("600", "899"), ("90", "99"),
    ]),
    (Prefix::Isbn978, "99939", "Guatemala", &[
        ("0", "2"), ("30", "59"), ("600", "899"), ("90", "99"),
    ]),
    (Prefix::Isbn978, "99940", "Georgia", &[("0", "0"), ("10", "69"), ("700", "999")]),
    (Prefix::Isbn978, "99941", "Armenia", &[("0", "2"), ("30", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99942", "Sudan", &[("0", "4"), ("50", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99943", "Albania", &[("0", "2"), ("30", "59"), ("600", "999")]),
    (Prefix::Isbn978, "99944", "Ethiopia", &[("0", "4"), ("50", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99945", "Namibia", &[("0", "4"), ("50", "89"), ("900", "999")]),
    (Prefix::Isbn978, "99946", "Nepal", &[("0", "2"), ("30", "59"), ("600", "999")]),
    (Prefix::Isbn978, "99947", "Tajikistan", &[("0", "2"), ("30", "69"), ("700", "999")]),
    (Prefix::Isbn978, "99948", "Eritrea", &[("0", "4"), ("50", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99949", "Mauritius", &[("0", "1"), ("20", "89"), ("900", "999")]),
    (Prefix::Isbn978, "99950", "Cambodia", &[("0", "4"), ("50", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99951", "Reserved Agency", &[]),
    (Prefix::Isbn978, "99952", "Mali", &[("0", "4"), ("50", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99953", "Paraguay", &[
        ("0", "2"), ("30", "79"), ("800", "939"), ("94", "99"),
    ]),
    (Prefix::Isbn978, "99954", "Bolivia", &[
        ("0", "2"), ("30", "69"), ("700", "879"), ("88", "99"),
    ]),
    (Prefix::Isbn978, "99955", "Srpska, Republic of", &[
        ("0", "1"), ("20", "59"), ("600", "799"), ("80", "99"),
    ]),
    (Prefix::Isbn978, "99956", "Albania", &[("00", "59"), ("600", "859"), ("86", "99")]),
    (Prefix::Isbn978, "99957", "Malta", &[("0", "1"), ("20", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99958", "Bahrain", &[("0", "4"), ("50", "93"), ("940", "999")]),
    (Prefix::Isbn978, "99959", "Luxembourg", &[("0", "2"), ("30", "59"), ("600", "999")]),
    (Prefix::Isbn978, "99960", "Malawi", &[
        ("00", "06"), ("070", "099"), ("10", "94"), ("950", "999"),
    ]),
    (Prefix::Isbn978, "99961", "El Salvador", &[
        ("0", "2"), ("300", "369"), ("37", "89"), ("900", "999"),
    ]),
    (Prefix::Isbn978, "99962", "Mongolia", &[("0", "4"), ("50", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99963", "Cambodia", &[("00", "49"), ("500", "919"), ("92", "99")]),
    (Prefix::Isbn978, "99964", "Nicaragua", &[("0", "1"), ("20", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99965", "Macau", &[
        ("0", "3"), ("400", "629"), ("63", "79"), ("800", "999"),
    ]),
    (Prefix::Isbn978, "99966", "Kuwait", &[
        ("0", "2"), ("30", "69"), ("700", "799"), ("80", "96"), ("970", "999"),
    ]),
    (Prefix::Isbn978, "99967", "Paraguay", &[("0", "1"), ("20", "59"), ("600", "899")]),
    (Prefix::Isbn978, "99968", "Botswana", &[
        ("0", "3"), ("400", "599"), ("60", "89"), ("900", "999"),
    ]),
    (Prefix::Isbn978, "99969", "Oman", &[("0", "4"), ("50", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99970", "Haiti", &[("0", "4"), ("50", "89"), ("900", "999")]),
    (Prefix::Isbn978, "99971", "Myanmar", &[("0", "3"), ("40", "84"), ("850", "999")]),
    (Prefix::Isbn978, "99972", "Faroe Islands", &[("0", "4"), ("50", "89"), ("900", "999")]),
    (Prefix::Isbn978, "99973", "Mongolia", &[("0", "3"), ("40", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99974", "Bolivia", &[("40", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99975", "Tajikistan", &[
        ("0", "2"), ("300", "399"), ("40", "79"), ("800", "999"),
    ]),
    (Prefix::Isbn978, "99976", "Srpska, Republic of", &[
        ("0", "1"), ("20", "59"), ("600", "799"), ("900", "999"),
    ]),
    (Prefix::Isbn978, "99977", "Rwanda", &[
        ("0", "1"), ("40", "69"), ("700", "799"), ("975", "999"),
    ]),
    (Prefix::Isbn978, "99978", "Mongolia", &[("0", "4"), ("50", "69"), ("700", "999")]),
    (Prefix::Isbn978, "99979", "Honduras", &[("0", "3"), ("40", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99980", "Bhutan", &[("0", "0"), ("30", "59"), ("700", "999")]),
    (Prefix::Isbn978, "99981", "Macau", &[
        ("0", "1"), ("200", "219"), ("22", "74"), ("750", "999"),
    ]),
    (Prefix::Isbn978, "99982", "Benin", &[("0", "1"), ("50", "68"), ("900", "949")]),
    (Prefix::Isbn978, "99983", "El Salvador", &[("0", "0"), ("50", "69"), ("950", "999")]),
    (Prefix::Isbn978, "99984", "Brunei Darussalam", &[("0", "0"), ("50", "69"), ("950", "999")]),
    (Prefix::Isbn978, "99985", "Tajikistan", &[("0", "1"), ("25", "79"), ("800", "999")]),
    (Prefix::Isbn978, "99986", "Myanmar", &[("0", "0"), ("50", "69"), ("950", "999")]),
    (Prefix::Isbn978, "99987", "Luxembourg", &[("700", "999")]),
    (Prefix::Isbn978, "99988", "Sudan", &[("0", "0"), ("50", "54"), ("800", "824")]),
    (Prefix::Isbn978, "99989", "Paraguay", &[("0", "1"), ("50", "79"), ("900", "999")]),
    (Prefix::Isbn978, "99990", "Ethiopia", &[("0", "0"), ("50", "57"), ("960", "999")]),
    (Prefix::Isbn978, "99992", "Oman", &[("0", "1"), ("50", "64"), ("950", "999")]),
    (Prefix::Isbn978, "99993", "Mauritius", &[("0", "1"), ("50", "54"), ("980", "999")]),
    (Prefix::Isbn979, "10", "France", &[
        ("00", "19"), ("200", "699"), ("7000", "8999"), ("90000", "97599"), ("976000", "999999"),
    ]),
    (Prefix::Isbn979, "11", "Korea, Republic", &[
        ("00", "24"), ("250", "549"), ("5500", "8499"), ("85000", "94999"), ("950000", "999999"),
    ]),
    (Prefix::Isbn979, "12", "Italy", &[
        ("200", "299"), ("5450", "5999"), ("80000", "84999"), ("985000", "999999"),
    ]),
    (Prefix::Isbn979, "13", "Spain", &[
        ("00", "00"), ("600", "604"), ("7000", "7349"), ("87500", "89999"),
    ]),
    (Prefix::Isbn979, "8", "United States", &[
        ("200", "229"), ("3500", "8849"), ("88500", "89999"), ("9850000", "9899999"),
    ]),
];
