/// A member country's marker site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub name:      &'static str,
    /// Degrees, north positive.
    pub latitude:  f32,
    /// Degrees, east positive.
    pub longitude: f32,
    /// Flag image shown next to the member.
    pub icon:      &'static str,
}

const fn point(name: &'static str, latitude: f32, longitude: f32, icon: &'static str) -> GeoPoint {
    GeoPoint {
        name,
        latitude,
        longitude,
        icon,
    }
}

const BRAZIL: GeoPoint = point("Brazil", -8.7667, -63.9, "images/png22.webp");
const ETHIOPIA: GeoPoint = point("Ethiopia", 9.1958, 40.4925, "images/png19.webp");
const RUSSIA: GeoPoint = point("Russia", 62.14389, 105.57, "images/png26.webp");
const INDIA: GeoPoint = point("India", 20.93972, 78.92, "images/png16.webp");
const CHINA: GeoPoint = point("China", 36.89389, 104.08444, "images/png24.webp");
const UAE: GeoPoint = point("United Arab Emirates", 23.46611, 53.84917, "images/png12.webp");
const SOUTH_AFRICA: GeoPoint = point("South Africa", -30.12889, 22.95722, "images/png10.webp");
const IRAN: GeoPoint = point("Iran", 32.83056, 53.71222, "images/png14.webp");
const EGYPT: GeoPoint = point("Egypt", 27.11194, 30.77722, "images/png06.webp");
const SAUDI_ARABIA: GeoPoint = point("Saudi Arabia", 24.34944, 44.95917, "images/png02.webp");
const KAZAKHSTAN: GeoPoint = point("Kazakhstan", 48.30444, 66.92583, "images/png21.webp");
const PAKISTAN: GeoPoint = point("Pakistan", 30.61917, 69.3525, "images/png18.webp");
const BELARUS: GeoPoint = point("Belarus", 53.79389, 27.985, "images/png27.webp");
const UZBEKISTAN: GeoPoint = point("Uzbekistan", 41.65417, 64.56194, "images/png17.webp");
const KYRGYZSTAN: GeoPoint = point("Kyrgyzstan", 41.32667, 74.77333, "images/png20.webp");
const TAJIKISTAN: GeoPoint = point("Tajikistan", 38.94917, 71.29667, "images/png15.webp");
const ARMENIA: GeoPoint = point("Armenia", 40.10889, 45.04444, "images/png29.webp");
const MOLDOVA: GeoPoint = point("Moldova", 47.46028, 28.34972, "images/png28.webp");
const AZERBAIJAN: GeoPoint = point("Azerbaijan", 40.24111, 47.58333, "images/png25.webp");
const PHILIPPINES: GeoPoint = point("Philippines", 13.1875, 121.7844, "images/png32.webp");
const AUSTRALIA: GeoPoint = point("Australia", -24.3336, 133.692, "images/png31.webp");
const SINGAPORE: GeoPoint = point("Singapore", 1.3642, 103.8192, "images/png30.webp");
const CANADA: GeoPoint = point("Canada", 56.7656, -106.5872, "images/png28.webp");
const BRUNEI: GeoPoint = point("Brunei", 4.5714, 114.7292, "images/png17.webp");
const JAPAN: GeoPoint = point("Japan", 36.5556, 138.2319, "images/png13.webp");
const THAILAND: GeoPoint = point("Thailand", 16.0928, 100.9325, "images/png09.webp");
const MALAYSIA: GeoPoint = point("Malaysia", 4.4483, 101.9172, "images/png04.webp");
const INDONESIA: GeoPoint = point("Indonesia", 0.5225, 114.0325, "images/png03.webp");
const SOUTH_KOREA: GeoPoint = point("Republic of Korea", 36.002, 127.7617, "images/png01.webp");

const BRICS_MEMBERS: [GeoPoint; 10] = [
    BRAZIL,
    ETHIOPIA,
    RUSSIA,
    INDIA,
    CHINA,
    UAE,
    SOUTH_AFRICA,
    IRAN,
    EGYPT,
    SAUDI_ARABIA,
];

const SCO_MEMBERS: [GeoPoint; 10] = [
    KAZAKHSTAN, PAKISTAN, BELARUS, RUSSIA, IRAN, CHINA, INDIA, UZBEKISTAN, KYRGYZSTAN, TAJIKISTAN,
];

const CIS_MEMBERS: [GeoPoint; 8] = [
    RUSSIA, ARMENIA, BELARUS, MOLDOVA, UZBEKISTAN, KYRGYZSTAN, TAJIKISTAN, AZERBAIJAN,
];

const EAEU_MEMBERS: [GeoPoint; 5] = [RUSSIA, BELARUS, KAZAKHSTAN, KYRGYZSTAN, TAJIKISTAN];

const APEC_MEMBERS: [GeoPoint; 12] = [
    PHILIPPINES,
    AUSTRALIA,
    SINGAPORE,
    CANADA,
    RUSSIA,
    CHINA,
    BRUNEI,
    JAPAN,
    THAILAND,
    MALAYSIA,
    INDONESIA,
    SOUTH_KOREA,
];

/// The groupings a marker set can be built from, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Organization {
    #[default]
    Brics,
    Sco,
    Cis,
    Eaeu,
    Apec,
}

impl Organization {
    pub const ALL: [Self; 5] = [Self::Brics, Self::Sco, Self::Cis, Self::Eaeu, Self::Apec];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Brics => "BRICS",
            Self::Sco => "SCO",
            Self::Cis => "CIS",
            Self::Eaeu => "EAEU",
            Self::Apec => "APEC",
        }
    }

    pub const fn members(self) -> &'static [GeoPoint] {
        match self {
            Self::Brics => &BRICS_MEMBERS,
            Self::Sco => &SCO_MEMBERS,
            Self::Cis => &CIS_MEMBERS,
            Self::Eaeu => &EAEU_MEMBERS,
            Self::Apec => &APEC_MEMBERS,
        }
    }

    pub fn member(self, index: usize) -> Option<&'static GeoPoint> { self.members().get(index) }

    /// Index of the member after `index`, wrapping; the first member when nothing is focused.
    pub const fn next_member(self, index: Option<usize>) -> usize {
        let count = self.members().len();
        match index {
            Some(current) if count > 0 => (current + 1) % count,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_member_is_on_the_map() {
        for organization in Organization::ALL {
            assert!(!organization.members().is_empty(), "{}", organization.label());
            for member in organization.members() {
                assert!((-90.0..=90.0).contains(&member.latitude), "{}", member.name);
                assert!((-180.0..=180.0).contains(&member.longitude), "{}", member.name);
                assert!(!member.icon.is_empty());
            }
        }
    }

    #[test]
    fn member_counts_and_order() {
        assert_eq!(Organization::Brics.members().len(), 10);
        assert_eq!(Organization::Sco.members().len(), 10);
        assert_eq!(Organization::Cis.members().len(), 8);
        assert_eq!(Organization::Eaeu.members().len(), 5);
        assert_eq!(Organization::Apec.members().len(), 12);
        assert_eq!(Organization::Eaeu.member(0).map(|m| m.name), Some("Russia"));
        assert_eq!(Organization::Apec.member(11).map(|m| m.name), Some("Republic of Korea"));
    }

    #[test]
    fn out_of_range_member_is_none() {
        assert!(Organization::Eaeu.member(5).is_none());
        assert!(Organization::Brics.member(usize::MAX).is_none());
    }

    #[test]
    fn shared_members_share_coordinates() {
        let russia_in = |organization: Organization| {
            organization
                .members()
                .iter()
                .find(|member| member.name == "Russia")
                .copied()
        };
        for organization in Organization::ALL {
            assert_eq!(russia_in(organization), Some(RUSSIA), "{}", organization.label());
        }
    }

    #[test]
    fn cycling_wraps_around() {
        assert_eq!(Organization::Eaeu.next_member(None), 0);
        assert_eq!(Organization::Eaeu.next_member(Some(0)), 1);
        assert_eq!(Organization::Eaeu.next_member(Some(4)), 0);
    }
}
