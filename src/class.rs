use crate::{Rule, RULE_COUNT};

/// Wolfram's empirical classification of elementary rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WolframClass {
    Homogeneous = 1,
    Periodic = 2,
    Chaotic = 3,
    Complex = 4,
}

const HOMOGENEOUS: [u8; 24] = [
    0, 8, 32, 40, 64, 96, 128, 136, 160, 168, 192, 224, 234, 235, 238, 239, 248, 249, 250, 251,
    252, 253, 254, 255,
];

const CHAOTIC: [u8; 26] = [
    18, 22, 30, 45, 60, 75, 86, 89, 90, 101, 102, 105, 122, 126, 129, 135, 146, 149, 150, 151, 153,
    161, 165, 182, 183, 195,
];

const COMPLEX: [u8; 14] = [
    41, 54, 97, 106, 107, 110, 120, 121, 124, 137, 147, 169, 193, 225,
];

/// Class of every rule, indexed by rule number. Rules not listed above are periodic.
static CLASS_OF: [WolframClass; RULE_COUNT] = {
    let mut table = [WolframClass::Periodic; RULE_COUNT];
    let mut i = 0;
    while i < HOMOGENEOUS.len() {
        table[HOMOGENEOUS[i] as usize] = WolframClass::Homogeneous;
        i += 1;
    }
    let mut i = 0;
    while i < CHAOTIC.len() {
        table[CHAOTIC[i] as usize] = WolframClass::Chaotic;
        i += 1;
    }
    let mut i = 0;
    while i < COMPLEX.len() {
        table[COMPLEX[i] as usize] = WolframClass::Complex;
        i += 1;
    }
    table
};

impl WolframClass {
    pub const ALL: [WolframClass; 4] = [
        Self::Homogeneous,
        Self::Periodic,
        Self::Chaotic,
        Self::Complex,
    ];

    pub fn of(rule: Rule) -> Self {
        CLASS_OF[rule.index() as usize]
    }

    /// Class with the given number, `1..=4`.
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    /// Directory-friendly name, e.g. `III_Chaotic`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Homogeneous => "I_Homogeneous",
            Self::Periodic => "II_Periodic",
            Self::Chaotic => "III_Chaotic",
            Self::Complex => "IV_Complex",
        }
    }

    /// Rules of this class in index order.
    pub fn rules(self) -> impl Iterator<Item = Rule> {
        Rule::all().filter(move |&rule| Self::of(rule) == self)
    }
}

impl std::fmt::Display for WolframClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
