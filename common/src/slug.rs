//! スラッグ生成
//!
//! 種目名からファイル名に使える識別子を作る。単射ではない
//! （"Push-up" と "Push Up" は同じスラッグになる）。

use regex::Regex;

/// 種目名をスラッグに変換する
///
/// 小文字化し、`[a-z0-9]` 以外の連続を `-` 1文字にまとめ、先頭・末尾の `-` を除去する。
pub fn slugify(name: &str) -> String {
    lazy_static::lazy_static! {
        static ref NON_ALNUM_RE: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    }

    let lower = name.to_lowercase();
    let collapsed = NON_ALNUM_RE.replace_all(&lower, "-");
    collapsed.trim_matches('-').to_string()
}
