//! Static biography data pools
//!
//! Name, city and state pools consumed by the biography generator. Pools are
//! keyed by nationality region so international recruits read plausibly.

use crate::models::Nationality;

/// US states by postal abbreviation
pub const US_STATES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

/// Canadian provinces by postal abbreviation
pub const CA_PROVINCES: [&str; 10] =
    ["AB", "BC", "MB", "NB", "NL", "NS", "ON", "PE", "QC", "SK"];

const FIRST_NAMES_EN: [&str; 36] = [
    "Aiden", "Austin", "Blake", "Brady", "Brandon", "Caleb", "Cameron", "Carson", "Chase",
    "Cole", "Connor", "Cooper", "Derek", "Dylan", "Eli", "Ethan", "Garrett", "Grant", "Hunter",
    "Jack", "Jake", "Jordan", "Josh", "Kyle", "Landon", "Logan", "Lucas", "Mason", "Matt",
    "Nolan", "Owen", "Parker", "Ryan", "Trevor", "Tyler", "Wyatt",
];

const LAST_NAMES_EN: [&str; 40] = [
    "Anderson", "Bailey", "Baker", "Bennett", "Brooks", "Campbell", "Carter", "Clark",
    "Collins", "Cooper", "Davis", "Edwards", "Evans", "Foster", "Graham", "Hall", "Harris",
    "Hayes", "Henderson", "Hughes", "Jenkins", "Johnson", "Kelly", "Lewis", "Miller",
    "Mitchell", "Murphy", "Nelson", "Parker", "Peterson", "Reed", "Richardson", "Roberts",
    "Sanders", "Stewart", "Sullivan", "Thompson", "Walker", "Wilson", "Young",
];

const FIRST_NAMES_LATIN: [&str; 12] = [
    "Alejandro", "Carlos", "Diego", "Eduardo", "Francisco", "Javier", "Jose", "Luis", "Miguel",
    "Pedro", "Rafael", "Yadier",
];

const LAST_NAMES_LATIN: [&str; 12] = [
    "Alvarez", "Castillo", "Cruz", "Fernandez", "Garcia", "Gonzalez", "Hernandez", "Martinez",
    "Ramirez", "Rodriguez", "Santana", "Torres",
];

const FIRST_NAMES_JP: [&str; 8] =
    ["Daiki", "Haruto", "Kenta", "Ren", "Shohei", "Sota", "Takumi", "Yuto"];

const LAST_NAMES_JP: [&str; 8] =
    ["Ito", "Kobayashi", "Nakamura", "Sato", "Suzuki", "Tanaka", "Watanabe", "Yamamoto"];

const FIRST_NAMES_KR: [&str; 8] =
    ["Dohyun", "Jihoon", "Jungho", "Minho", "Seungmin", "Sungjin", "Taeyang", "Woojin"];

const LAST_NAMES_KR: [&str; 8] = ["Choi", "Jung", "Kang", "Kim", "Lee", "Lim", "Park", "Yoon"];

const FIRST_NAMES_IT: [&str; 8] =
    ["Alessandro", "Davide", "Federico", "Giovanni", "Lorenzo", "Marco", "Matteo", "Simone"];

const LAST_NAMES_IT: [&str; 8] =
    ["Bianchi", "Colombo", "Esposito", "Ferrari", "Greco", "Moretti", "Ricci", "Romano"];

const FIRST_NAMES_CZ: [&str; 8] =
    ["Adam", "Filip", "Jakub", "Jan", "Lukas", "Martin", "Ondrej", "Tomas"];

const LAST_NAMES_CZ: [&str; 8] =
    ["Cerny", "Dvorak", "Horak", "Kucera", "Novak", "Prochazka", "Svoboda", "Vesely"];

const US_CITIES: [&str; 24] = [
    "Arlington", "Aurora", "Bakersfield", "Chandler", "Clearwater", "Columbus", "Fairview",
    "Franklin", "Georgetown", "Greenville", "Huntsville", "Lakewood", "Madison", "Marietta",
    "Midland", "Naperville", "Peoria", "Plano", "Riverside", "Salem", "Springfield", "Tempe",
    "Vancouver", "Waco",
];

const CA_CITIES: [&str; 8] =
    ["Burnaby", "Calgary", "Hamilton", "London", "Mississauga", "Regina", "Surrey", "Windsor"];

const LATIN_CITIES: [&str; 8] = [
    "Bayamon", "Caguas", "Havana", "La Romana", "San Cristobal", "San Juan", "Santiago",
    "Santo Domingo",
];

const JP_CITIES: [&str; 6] = ["Fukuoka", "Kobe", "Nagoya", "Osaka", "Sendai", "Yokohama"];

const KR_CITIES: [&str; 6] = ["Busan", "Daegu", "Daejeon", "Gwangju", "Incheon", "Suwon"];

const AU_CITIES: [&str; 6] = ["Adelaide", "Brisbane", "Geelong", "Melbourne", "Perth", "Sydney"];

const IT_CITIES: [&str; 6] = ["Bologna", "Florence", "Milan", "Parma", "Rome", "Turin"];

const CZ_CITIES: [&str; 6] = ["Brno", "Liberec", "Olomouc", "Ostrava", "Plzen", "Prague"];

/// First and last name pools for a nationality
pub fn name_pools(nationality: Nationality) -> (&'static [&'static str], &'static [&'static str]) {
    match nationality {
        Nationality::American | Nationality::Canadian | Nationality::Australian => {
            (&FIRST_NAMES_EN, &LAST_NAMES_EN)
        }
        Nationality::Cuban | Nationality::PuertoRican | Nationality::Dominican => {
            (&FIRST_NAMES_LATIN, &LAST_NAMES_LATIN)
        }
        Nationality::Japanese => (&FIRST_NAMES_JP, &LAST_NAMES_JP),
        Nationality::Korean => (&FIRST_NAMES_KR, &LAST_NAMES_KR),
        Nationality::Italian => (&FIRST_NAMES_IT, &LAST_NAMES_IT),
        Nationality::Czech => (&FIRST_NAMES_CZ, &LAST_NAMES_CZ),
    }
}

/// Hometown city pool for a nationality
pub fn city_pool(nationality: Nationality) -> &'static [&'static str] {
    match nationality {
        Nationality::American => &US_CITIES,
        Nationality::Canadian => &CA_CITIES,
        Nationality::Cuban | Nationality::PuertoRican | Nationality::Dominican => &LATIN_CITIES,
        Nationality::Japanese => &JP_CITIES,
        Nationality::Korean => &KR_CITIES,
        Nationality::Australian => &AU_CITIES,
        Nationality::Italian => &IT_CITIES,
        Nationality::Czech => &CZ_CITIES,
    }
}

/// High school name suffixes
pub const SCHOOL_SUFFIXES: [&str; 3] = ["High School", "Academy", "Prep"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nationality_has_pools() {
        let nationalities = [
            Nationality::American,
            Nationality::Canadian,
            Nationality::Cuban,
            Nationality::PuertoRican,
            Nationality::Dominican,
            Nationality::Japanese,
            Nationality::Korean,
            Nationality::Australian,
            Nationality::Italian,
            Nationality::Czech,
        ];
        for nationality in nationalities {
            let (first, last) = name_pools(nationality);
            assert!(!first.is_empty(), "{:?} has no first names", nationality);
            assert!(!last.is_empty(), "{:?} has no last names", nationality);
            assert!(!city_pool(nationality).is_empty(), "{:?} has no cities", nationality);
        }
    }

    #[test]
    fn test_state_lists_are_complete() {
        assert_eq!(US_STATES.len(), 50);
        assert_eq!(CA_PROVINCES.len(), 10);
    }
}
