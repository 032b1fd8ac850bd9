mod geminate;

use super::RomajiTable;

fn convert(kana: &str) -> Vec<String> {
    RomajiTable::global().convert(kana)
}
