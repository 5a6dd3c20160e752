//! Compiled-in TAIFEX single-stock futures reference data.
//!
//! Snapshot of listed products and their posted margin levels. Ratios are
//! (settlement, maintenance, initial) fractions of contract value; products
//! sit in one of the three risk levels published by the exchange. Amend this
//! table when TAIFEX revises levels or lists new products.

use crate::domain::{FutureContract, FuturesCode, MarginRatio, StockCode};

const LEVEL_1: (f64, f64, f64) = (0.10, 0.1035, 0.135);
const LEVEL_2: (f64, f64, f64) = (0.12, 0.1242, 0.162);
const LEVEL_3: (f64, f64, f64) = (0.15, 0.15525, 0.2025);

const STANDARD_SHARES: u32 = 2000;
const MINI_SHARES: u32 = 100;

pub(super) fn contracts() -> Vec<FutureContract> {
    [
        ("CAF", "南亞期貨", "1303", STANDARD_SHARES, LEVEL_1),
        ("CBF", "中鋼期貨", "2002", STANDARD_SHARES, LEVEL_1),
        ("CCF", "聯電期貨", "2303", STANDARD_SHARES, LEVEL_2),
        ("CDF", "台積電期貨", "2330", STANDARD_SHARES, LEVEL_1),
        ("CEF", "富邦金期貨", "2881", STANDARD_SHARES, LEVEL_1),
        ("CFF", "台塑期貨", "1301", STANDARD_SHARES, LEVEL_1),
        ("CGF", "仁寶期貨", "2324", STANDARD_SHARES, LEVEL_1),
        ("CHF", "友達期貨", "2409", STANDARD_SHARES, LEVEL_2),
        ("CJF", "華南金期貨", "2880", STANDARD_SHARES, LEVEL_1),
        ("CKF", "國泰金期貨", "2882", STANDARD_SHARES, LEVEL_1),
        ("CLF", "兆豐金期貨", "2886", STANDARD_SHARES, LEVEL_1),
        ("CMF", "台新金期貨", "2887", STANDARD_SHARES, LEVEL_1),
        ("CNF", "中信金期貨", "2891", STANDARD_SHARES, LEVEL_1),
        ("CQF", "統一期貨", "1216", STANDARD_SHARES, LEVEL_1),
        ("CRF", "遠傳期貨", "4904", STANDARD_SHARES, LEVEL_1),
        ("CSF", "群創期貨", "3481", STANDARD_SHARES, LEVEL_2),
        ("CZF", "玉山金期貨", "2884", STANDARD_SHARES, LEVEL_1),
        ("DCF", "長榮期貨", "2603", STANDARD_SHARES, LEVEL_3),
        ("DHF", "鴻海期貨", "2317", STANDARD_SHARES, LEVEL_1),
        ("DIF", "和碩期貨", "4938", STANDARD_SHARES, LEVEL_1),
        ("DKF", "陽明期貨", "2609", STANDARD_SHARES, LEVEL_3),
        ("DLF", "華航期貨", "2610", STANDARD_SHARES, LEVEL_2),
        ("DNF", "廣達期貨", "2382", STANDARD_SHARES, LEVEL_1),
        ("DOF", "中華電期貨", "2412", STANDARD_SHARES, LEVEL_1),
        ("DPF", "台灣大期貨", "3045", STANDARD_SHARES, LEVEL_1),
        ("DQF", "聯發科期貨", "2454", STANDARD_SHARES, LEVEL_2),
        ("DSF", "日月光投控期貨", "3711", STANDARD_SHARES, LEVEL_1),
        ("DVF", "長榮航期貨", "2618", STANDARD_SHARES, LEVEL_3),
        ("DWF", "台達電期貨", "2308", STANDARD_SHARES, LEVEL_1),
        ("DXF", "光寶科期貨", "2301", STANDARD_SHARES, LEVEL_1),
        ("QEF", "小型鴻海期貨", "2317", MINI_SHARES, LEVEL_1),
        ("QFF", "小型台積電期貨", "2330", MINI_SHARES, LEVEL_1),
        ("QLF", "小型聯發科期貨", "2454", MINI_SHARES, LEVEL_2),
    ]
    .into_iter()
    .map(|(code, name, stock_code, shares, (settlement, maintenance, initial))| {
        FutureContract::new(
            FuturesCode::parse(code).expect("catalog codes are valid"),
            name,
            StockCode::parse(stock_code).expect("catalog stock codes are valid"),
            shares,
            MarginRatio::new(settlement, maintenance, initial).expect("catalog ratios are valid"),
        )
        .expect("catalog entries are valid")
    })
    .collect::<Vec<_>>()
}
