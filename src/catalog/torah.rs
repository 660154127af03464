//! The reference parsha table: 54 sections covering the five books.
//!
//! Data is fixed at build time. The boundary addresses and verse counts come
//! from the upstream reference data set and are carried verbatim.

use crate::catalog::section::SectionRecord;

/// (name, book, start, end, verse_count) for each parsha, in reading order.
const PARSHAS: [(&str, &str, (u32, u32), (u32, u32), u64); 54] = [
    ("Bereshit", "Genesis", (1, 1), (6, 8), 146),
    ("Noach", "Genesis", (6, 9), (11, 32), 153),
    ("Lech Lecha", "Genesis", (12, 1), (17, 27), 126),
    ("Vayera", "Genesis", (18, 1), (22, 24), 147),
    ("Chayei Sara", "Genesis", (23, 1), (25, 18), 105),
    ("Toldot", "Genesis", (25, 19), (28, 9), 106),
    ("Vayetzei", "Genesis", (28, 10), (32, 3), 148),
    ("Vayishlach", "Genesis", (32, 4), (36, 43), 153),
    ("Vayeshev", "Genesis", (37, 1), (40, 23), 112),
    ("Miketz", "Genesis", (41, 1), (44, 17), 146),
    ("Vayigash", "Genesis", (44, 18), (47, 27), 106),
    ("Vayechi", "Genesis", (47, 28), (50, 26), 85),
    ("Shemot", "Exodus", (1, 1), (6, 1), 124),
    ("Vaera", "Exodus", (6, 2), (9, 35), 121),
    ("Bo", "Exodus", (10, 1), (13, 16), 106),
    ("Beshalach", "Exodus", (13, 17), (17, 16), 116),
    ("Yitro", "Exodus", (18, 1), (20, 23), 75),
    ("Mishpatim", "Exodus", (21, 1), (24, 18), 118),
    ("Terumah", "Exodus", (25, 1), (27, 19), 96),
    ("Tetzaveh", "Exodus", (27, 20), (30, 10), 101),
    ("Ki Tisa", "Exodus", (30, 11), (34, 35), 139),
    ("Vayakhel", "Exodus", (35, 1), (38, 20), 122),
    ("Pekudei", "Exodus", (38, 21), (40, 38), 92),
    ("Vayikra", "Leviticus", (1, 1), (5, 26), 111),
    ("Tzav", "Leviticus", (6, 1), (8, 36), 97),
    ("Shmini", "Leviticus", (9, 1), (11, 47), 91),
    ("Tazria", "Leviticus", (12, 1), (13, 59), 67),
    ("Metzora", "Leviticus", (14, 1), (15, 33), 90),
    ("Achrei Mot", "Leviticus", (16, 1), (18, 30), 80),
    ("Kedoshim", "Leviticus", (19, 1), (20, 27), 64),
    ("Emor", "Leviticus", (21, 1), (24, 23), 124),
    ("Behar", "Leviticus", (25, 1), (26, 2), 57),
    ("Bechukotai", "Leviticus", (26, 3), (27, 34), 78),
    ("Bamidbar", "Numbers", (1, 1), (4, 20), 159),
    ("Nasso", "Numbers", (4, 21), (7, 89), 176),
    ("Beha'alotcha", "Numbers", (8, 1), (12, 16), 136),
    ("Sh'lach", "Numbers", (13, 1), (15, 41), 119),
    ("Korach", "Numbers", (16, 1), (18, 32), 95),
    ("Chukat", "Numbers", (19, 1), (22, 1), 87),
    ("Balak", "Numbers", (22, 2), (25, 9), 104),
    ("Pinchas", "Numbers", (25, 10), (30, 1), 168),
    ("Matot", "Numbers", (30, 2), (32, 42), 112),
    ("Masei", "Numbers", (33, 1), (36, 13), 132),
    ("Devarim", "Deuteronomy", (1, 1), (3, 22), 105),
    ("Vaetchanan", "Deuteronomy", (3, 23), (7, 11), 122),
    ("Eikev", "Deuteronomy", (7, 12), (11, 25), 111),
    ("Re'eh", "Deuteronomy", (11, 26), (16, 17), 126),
    ("Shoftim", "Deuteronomy", (16, 18), (21, 9), 97),
    ("Ki Teitzei", "Deuteronomy", (21, 10), (25, 19), 110),
    ("Ki Tavo", "Deuteronomy", (26, 1), (29, 8), 122),
    ("Nitzavim", "Deuteronomy", (29, 9), (30, 20), 40),
    ("Vayeilech", "Deuteronomy", (31, 1), (30, 1), 30),
    ("Ha'Azinu", "Deuteronomy", (32, 1), (52, 1), 52),
    ("V'Zot HaBerachah", "Deuteronomy", (33, 1), (34, 12), 41),
];

/// Materialize the parsha table as owned records.
pub(crate) fn parsha_records() -> Vec<SectionRecord> {
    PARSHAS
        .iter()
        .map(|&(name, book, start, end, verse_count)| {
            SectionRecord::new(name, book, start, end, verse_count)
        })
        .collect()
}
