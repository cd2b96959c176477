/// Trip data structures
///
/// These structs mirror the authored trip files (camelCase JSON).
/// They are read-only for the lifetime of the application: the catalog
/// parses them once at startup and every page borrows from there.
use serde::{Deserialize, Serialize};

/// A single photo reference
///
/// `src` is either a path relative to the configured photo root or a URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Links,
    Parkland,
    Heathland,
    Coastal,
}

impl CourseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Links => "links",
            CourseType::Parkland => "parkland",
            CourseType::Heathland => "heathland",
            CourseType::Coastal => "coastal",
        }
    }

    /// Accent color used for badges of this course type
    pub fn accent(&self) -> DayColor {
        match self {
            CourseType::Links => DayColor::Emerald,
            CourseType::Parkland => DayColor::Amber,
            CourseType::Heathland => DayColor::Rose,
            CourseType::Coastal => DayColor::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
}

/// Founding year, or a free-form label when the year is not a plain number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Established {
    Year(u16),
    Text(String),
}

impl Established {
    /// "Etablert" for historic clubs, "Åpnet" for everything else
    pub fn label(&self) -> &'static str {
        match self {
            Established::Year(year) if *year < 1900 => "Etablert",
            _ => "Åpnet",
        }
    }
}

impl std::fmt::Display for Established {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Established::Year(year) => write!(f, "{}", year),
            Established::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GolfCourse {
    /// Unique within a day; with the day's date it keys expand/collapse
    pub name: String,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub par: u8,
    pub yards: u32,
    #[serde(default)]
    pub established: Option<Established>,
    #[serde(default)]
    pub designer: Option<String>,
    #[serde(default)]
    pub greenfee: Option<String>,
    #[serde(default)]
    pub ranking: Option<String>,
    pub description: String,
    #[serde(default)]
    pub distance_from_house: Option<String>,
    #[serde(default)]
    pub time_of_day: Option<TimeOfDay>,
    /// e.g. "09:00" or "TBC"
    #[serde(default)]
    pub tee_time: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo: Option<Photo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DinnerInfo {
    pub chefs: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub menu: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayColor {
    Amber,
    Emerald,
    Rose,
    Stone,
    Blue,
}

/// One calendar day of the trip, keyed by `date`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub date: String,
    pub month: String,
    pub day_name: String,
    pub title: String,
    pub subtitle: String,
    pub color: DayColor,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub dinner: Option<DinnerInfo>,
    #[serde(default)]
    pub courses: Vec<GolfCourse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub icon: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub airbnb_url: String,
    #[serde(default)]
    pub maps_url: String,
    pub rating: f32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub distance_from_airport: String,
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub town_description: String,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripInfo {
    pub dates: String,
    pub golfers: u32,
    pub days: u32,
    pub rounds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub label: String,
    pub amount: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Authored price list (green fees, house, flights...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Costs {
    #[serde(default)]
    pub items: Vec<CostItem>,
    #[serde(default)]
    pub total_per_person: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
}

/// Shared expenses paid by individual golfers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expenses {
    pub currency: String,
    #[serde(default)]
    pub entries: Vec<Expense>,
}

impl Expenses {
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Equal share per golfer, 0 when nobody is travelling
    pub fn share(&self, golfers: u32) -> f64 {
        if golfers == 0 {
            return 0.0;
        }
        self.total() / golfers as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportLeg {
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub departure: Option<String>,
    #[serde(default)]
    pub arrival: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    #[serde(default)]
    pub legs: Vec<TransportLeg>,
    #[serde(default)]
    pub note: Option<String>,
}

/// One authored itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub year: u16,
    pub title: String,
    pub location: String,
    pub country: String,
    pub info: TripInfo,
    pub accommodation: Accommodation,
    #[serde(default)]
    pub schedule: Vec<DaySchedule>,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub is_upcoming: bool,
    #[serde(default)]
    pub costs: Option<Costs>,
    #[serde(default)]
    pub expenses: Option<Expenses>,
    #[serde(default)]
    pub transport: Option<Transport>,
}

impl Trip {
    /// Days with a planned dinner, in schedule order
    pub fn dinner_days(&self) -> impl Iterator<Item = &DaySchedule> {
        self.schedule.iter().filter(|day| day.dinner.is_some())
    }

    /// First part of the location ("Brechin" for "Brechin, Angus")
    pub fn town(&self) -> &str {
        self.location.split(',').next().unwrap_or(&self.location).trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "date": "28",
            "month": "Aug",
            "dayName": "Fredag",
            "title": "Montrose Links",
            "subtitle": "2 runder",
            "color": "emerald"
        }"#;
        let day: DaySchedule = serde_json::from_str(json).unwrap();

        assert!(day.activities.is_empty());
        assert!(day.courses.is_empty());
        assert!(day.dinner.is_none());
        assert_eq!(day.color, DayColor::Emerald);
    }

    #[test]
    fn test_established_accepts_number_or_text() {
        let year: Established = serde_json::from_str("1562").unwrap();
        let text: Established = serde_json::from_str("\"ca. 1890\"").unwrap();

        assert_eq!(year, Established::Year(1562));
        assert_eq!(year.label(), "Etablert");
        assert_eq!(Established::Year(1990).label(), "Åpnet");
        assert_eq!(text.label(), "Åpnet");
        assert_eq!(text.to_string(), "ca. 1890");
    }

    #[test]
    fn test_course_type_field_is_renamed() {
        let json = r#"{
            "name": "Brechin Golf Club",
            "type": "parkland",
            "par": 72,
            "yards": 6096,
            "description": "Parklandbane",
            "timeOfDay": "morning"
        }"#;
        let course: GolfCourse = serde_json::from_str(json).unwrap();

        assert_eq!(course.course_type, CourseType::Parkland);
        assert_eq!(course.course_type.accent(), DayColor::Amber);
        assert_eq!(course.time_of_day, Some(TimeOfDay::Morning));
        assert!(course.photos.is_empty());
    }

    #[test]
    fn test_expenses_share() {
        let expenses = Expenses {
            currency: "GBP".into(),
            entries: vec![
                Expense { description: "Buggy".into(), amount: 70.0, paid_by: "Tor".into() },
                Expense { description: "Mat".into(), amount: 90.0, paid_by: "Roar".into() },
            ],
        };

        assert_eq!(expenses.total(), 160.0);
        assert_eq!(expenses.share(8), 20.0);
        assert_eq!(expenses.share(0), 0.0);
    }
}
