use crate::dict::{DictSegment, MemoryDictLoader};

/// A small two-segment dictionary. Phrases live in the first segment so they
/// claim their characters before the single-character entries do.
pub(crate) fn sample_loader() -> MemoryDictLoader {
    let phrases = DictSegment::from_entries([
        ("重庆", "chóng qìng"),
        ("中国", "zhōng guó"),
        ("长江", "cháng jiāng"),
    ]);
    let chars = DictSegment::from_entries([
        ("你", "nǐ"),
        ("好", "hǎo"),
        ("世", "shì"),
        ("界", "jiè"),
        ("中", "zhōng"),
        ("国", "guó"),
        ("重", "zhòng"),
        ("要", "yào"),
        ("庆", "qìng"),
        ("曾", "céng"),
        ("乐", "lè"),
        ("单", "dān"),
        ("于", "yú"),
        ("张", "zhāng"),
        ("三", "sān"),
        ("欧", "ōu"),
        ("阳", "yáng"),
        ("修", "xiū"),
        ("绿", "lǜ"),
        ("女", "nǚ"),
        ("略", "lüè"),
        ("长", "cháng"),
        ("江", "jiāng"),
        ("和", "hé"),
        ("我", "wǒ"),
        ("吗", "ma"),
    ]);
    let surnames = DictSegment::from_entries([
        ("欧阳", "ōu yáng"),
        ("单", "shàn"),
        ("曾", "zēng"),
        ("张", "zhāng"),
        ("欧", "ōu"),
    ]);
    MemoryDictLoader::from_segments(vec![phrases, chars], surnames)
}
