//! Immutable per-locale word tables used for title generation.
//!
//! Every table holds exactly ten title templates. Templates reference the
//! `{adjective}`, `{noun}`, `{noun2}` and `{verb}` placeholders.

use crate::locale::Locale;

/// Number of title templates defined for every locale.
pub(crate) const TEMPLATES_PER_LOCALE: usize = 10;

/// Word source for one locale.
#[derive(Debug)]
pub(crate) struct WordTable {
    pub(crate) templates: &'static [&'static str; TEMPLATES_PER_LOCALE],
    pub(crate) adjectives: &'static [&'static str],
    pub(crate) nouns: &'static [&'static str],
    pub(crate) verbs: &'static [&'static str],
}

/// Returns the word table for a locale.
pub(crate) const fn table(locale: Locale) -> &'static WordTable {
    match locale {
        Locale::EnUs => &EN_US,
        Locale::DeDe => &DE_DE,
        Locale::FrFr => &FR_FR,
        Locale::JaJp => &JA_JP,
    }
}

const EN_US: WordTable = WordTable {
    templates: &[
        "The {adjective} {noun}",
        "{adjective} {noun} and the {noun2}",
        "When {noun} {verb}",
        "The {adjective} {noun} of {noun2}",
        "{noun} in the {adjective} {noun2}",
        "The {adjective} {noun} Chronicles",
        "{noun} and the {adjective} {noun2}",
        "The {adjective} {noun} Society",
        "{noun}: A {adjective} {noun2}",
        "The {adjective} {noun} Mystery",
    ],
    adjectives: &[
        "Silent", "Crimson", "Forgotten", "Hidden", "Golden", "Broken", "Distant", "Wandering",
        "Hollow", "Bright", "Ancient", "Restless", "Velvet", "Frozen", "Secret", "Last",
    ],
    nouns: &[
        "River", "Garden", "Lantern", "Harbor", "Orchard", "Kingdom", "Mirror", "Compass",
        "Winter", "Library", "Tower", "Voyage", "Meadow", "Promise", "Shadow", "Island",
    ],
    verbs: &[
        "Falls", "Returns", "Whispers", "Burns", "Wakes", "Sings", "Breaks", "Wanders", "Fades",
        "Rises", "Waits", "Remembers",
    ],
};

const DE_DE: WordTable = WordTable {
    templates: &[
        "Der {adjective} {noun}",
        "{adjective} {noun} und der {noun2}",
        "Wenn {noun} {verb}",
        "Der {adjective} {noun} von {noun2}",
        "{noun} im {adjective} {noun2}",
        "Die {adjective} {noun} Chroniken",
        "{noun} und der {adjective} {noun2}",
        "Die {adjective} {noun} Gesellschaft",
        "{noun}: Ein {adjective} {noun2}",
        "Das {adjective} {noun} Geheimnis",
    ],
    adjectives: &[
        "stille", "rote", "vergessene", "verborgene", "goldene", "zerbrochene", "ferne",
        "wandernde", "alte", "helle", "dunkle", "gefrorene", "geheime", "letzte",
    ],
    nouns: &[
        "Fluss", "Garten", "Laterne", "Hafen", "Wald", "Spiegel", "Kompass", "Winter", "Turm",
        "Bibliothek", "Schatten", "Insel", "Morgen", "Brief",
    ],
    verbs: &[
        "fällt", "zurückkehrt", "flüstert", "brennt", "erwacht", "singt", "zerbricht",
        "verblasst", "wartet", "schweigt",
    ],
};

const FR_FR: WordTable = WordTable {
    templates: &[
        "Le {adjective} {noun}",
        "{adjective} {noun} et le {noun2}",
        "Quand {noun} {verb}",
        "Le {adjective} {noun} de {noun2}",
        "{noun} dans le {adjective} {noun2}",
        "Les {adjective} {noun} Chroniques",
        "{noun} et le {adjective} {noun2}",
        "La {adjective} {noun} Société",
        "{noun}: Un {adjective} {noun2}",
        "Le {adjective} {noun} Mystère",
    ],
    adjectives: &[
        "silencieux", "pourpre", "oublié", "caché", "doré", "brisé", "lointain", "errant",
        "ancien", "clair", "sombre", "gelé", "secret", "dernier",
    ],
    nouns: &[
        "fleuve", "jardin", "phare", "port", "verger", "royaume", "miroir", "compas", "hiver",
        "château", "voyage", "silence", "rivage", "secret",
    ],
    verbs: &[
        "tombe", "revient", "murmure", "brûle", "s'éveille", "chante", "se brise", "s'efface",
        "attend", "se souvient",
    ],
};

const JA_JP: WordTable = WordTable {
    templates: &[
        "{adjective} {noun}",
        "{noun}と{adjective} {noun2}",
        "{noun}が{verb}時",
        "{noun2}の{adjective} {noun}",
        "{adjective} {noun2}の中の{noun}",
        "{adjective} {noun}の記録",
        "{noun}と{adjective} {noun2}",
        "{adjective} {noun}協会",
        "{noun}：{adjective} {noun2}",
        "{adjective} {noun}の謎",
    ],
    adjectives: &[
        "静かな", "赤い", "忘れられた", "隠された", "黄金の", "遠い", "古い", "明るい", "暗い",
        "凍った", "秘密の", "最後の",
    ],
    nouns: &[
        "川", "庭", "灯台", "港", "森", "王国", "鏡", "冬", "塔", "図書館", "影", "島", "月", "手紙",
    ],
    verbs: &[
        "落ちる", "帰る", "囁く", "燃える", "目覚める", "歌う", "壊れる", "消える", "待つ",
    ],
};
