use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::errors::BeehiveError;

/// Maximum edit distance for which a "did you mean" hint is offered.
const SUGGESTION_DISTANCE: usize = 3;

/// Broad grouping used to organise categories in selectors and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryGroup {
    Transfers,
    Housing,
    Transportation,
    Shopping,
    FoodAndDining,
    Entertainment,
    Technology,
    Utilities,
    Business,
    Education,
    Insurance,
    Health,
    Pets,
    Banking,
    Streaming,
    Travel,
    Income,
    General,
}

impl CategoryGroup {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryGroup::Transfers => "Transfers",
            CategoryGroup::Housing => "Housing",
            CategoryGroup::Transportation => "Transportation",
            CategoryGroup::Shopping => "Shopping",
            CategoryGroup::FoodAndDining => "Food & Dining",
            CategoryGroup::Entertainment => "Entertainment",
            CategoryGroup::Technology => "Technology & Services",
            CategoryGroup::Utilities => "Utilities",
            CategoryGroup::Business => "Business",
            CategoryGroup::Education => "Education",
            CategoryGroup::Insurance => "Insurance",
            CategoryGroup::Health => "Health & Medical",
            CategoryGroup::Pets => "Pets",
            CategoryGroup::Banking => "Banking & Investments",
            CategoryGroup::Streaming => "Streaming & Subscriptions",
            CategoryGroup::Travel => "Travel",
            CategoryGroup::Income => "Income",
            CategoryGroup::General => "General",
        }
    }
}

macro_rules! categories {
    (
        system: $sys_variant:ident => $sys_code:literal, $sys_label:literal, $sys_group:ident;
        $( $variant:ident => $code:literal, $label:literal, $group:ident; )+
    ) => {
        /// Classification tag for the purpose of a movement.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Category {
            #[serde(rename = $sys_code)]
            $sys_variant,
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        /// User-selectable categories in presentation order.
        const SELECTABLE: &[Category] = &[$(Category::$variant,)+];

        impl Category {
            /// Stable wire code (`HOME_MAINTENANCE_REPAIRS`).
            pub fn code(&self) -> &'static str {
                match self {
                    Category::$sys_variant => $sys_code,
                    $(Category::$variant => $code,)+
                }
            }

            /// Human readable label (`Home Maintenance`).
            pub fn label(&self) -> &'static str {
                match self {
                    Category::$sys_variant => $sys_label,
                    $(Category::$variant => $label,)+
                }
            }

            pub fn group(&self) -> CategoryGroup {
                match self {
                    Category::$sys_variant => CategoryGroup::$sys_group,
                    $(Category::$variant => CategoryGroup::$group,)+
                }
            }
        }
    };
}

categories! {
    system: Transfer => "TRANSFER", "Transfer", Transfers;

    Rent => "RENT", "Rent", Housing;
    PropertyTaxes => "PROPERTY_TAXES", "Property Taxes", Housing;
    HomeMaintenanceRepairs => "HOME_MAINTENANCE_REPAIRS", "Home Maintenance", Housing;
    HomeInsurance => "HOME_INSURANCE", "Home Insurance", Housing;
    HouseholdSuppliesFurniture => "HOUSEHOLD_SUPPLIES_FURNITURE", "Household Items", Housing;

    Fuel => "FUEL", "Fuel", Transportation;
    PublicTransport => "PUBLIC_TRANSPORT", "Public Transport", Transportation;
    Uber => "UBER", "Uber", Transportation;
    CarMaintenance => "CAR_MAINTENANCE", "Car Maintenance", Transportation;
    Parking => "PARKING", "Parking", Transportation;
    VehicleInsurance => "VEHICLE_INSURANCE", "Vehicle Insurance", Transportation;
    Tolls => "TOLLS", "Tolls", Transportation;

    Shopping => "SHOPPING", "Shopping", Shopping;
    Clothing => "CLOTHING", "Clothing", Shopping;
    Electronics => "ELECTRONICS", "Electronics", Shopping;
    Gifts => "GIFTS", "Gifts", Shopping;
    BeautyCosmetics => "BEAUTY_COSMETICS", "Beauty", Shopping;

    Groceries => "GROCERIES", "Groceries", FoodAndDining;
    Restaurants => "RESTAURANTS", "Restaurants", FoodAndDining;
    FastFood => "FAST_FOOD", "Fast Food", FoodAndDining;
    CoffeeShops => "COFFEE_SHOPS", "Coffee Shops", FoodAndDining;
    AlcoholBars => "ALCOHOL_BARS", "Alcohol & Bars", FoodAndDining;
    FoodDrinks => "FOOD_DRINKS", "Food & Drinks", FoodAndDining;

    Entertainment => "ENTERTAINMENT", "Entertainment", Entertainment;
    Movies => "MOVIES", "Movies", Entertainment;
    Events => "EVENTS", "Events", Entertainment;
    Games => "GAMES", "Games", Entertainment;
    Nightlife => "NIGHTLIFE", "Nightlife", Entertainment;
    Hobbies => "HOBBIES", "Hobbies", Entertainment;
    Gym => "GYM", "Gym", Entertainment;

    Tech => "TECH", "Technology", Technology;
    SoftwareSubscriptions => "SOFTWARE_SUBSCRIPTIONS", "Software", Technology;
    InternetServices => "INTERNET_SERVICES", "Internet Services", Technology;
    MobilePhonePlans => "MOBILE_PHONE_PLANS", "Mobile Plans", Technology;
    Net => "NET", "Internet", Technology;

    Utilities => "UTILITIES", "Utilities", Utilities;
    Water => "WATER", "Water", Utilities;
    Electricity => "ELECTRICITY", "Electricity", Utilities;
    Gas => "GAS", "Gas", Utilities;

    OfficeSupplies => "OFFICE_SUPPLIES", "Office Supplies", Business;
    BusinessTravel => "BUSINESS_TRAVEL", "Business Travel", Business;
    ProfessionalServices => "PROFESSIONAL_SERVICES", "Professional", Business;

    Education => "EDUCATION", "Education", Education;
    OnlineCourses => "ONLINE_COURSES", "Online Courses", Education;
    Classes => "CLASSES", "Classes", Education;

    HealthInsurance => "HEALTH_INSURANCE", "Health Insurance", Insurance;
    CarInsurance => "CAR_INSURANCE", "Car Insurance", Insurance;
    LifeInsurance => "LIFE_INSURANCE", "Life Insurance", Insurance;
    TravelInsurance => "TRAVEL_INSURANCE", "Travel Insurance", Insurance;

    Health => "HEALTH", "Health", Health;
    Pharmacy => "PHARMACY", "Pharmacy", Health;
    Medical => "MEDICAL", "Medical", Health;
    Therapy => "THERAPY", "Therapy", Health;

    PetFood => "PET_FOOD", "Pet Food", Pets;
    VetVisits => "VET_VISITS", "Vet Visits", Pets;
    PetAccessories => "PET_ACCESSORIES", "Pet Accessories", Pets;
    PetGrooming => "PET_GROOMING", "Pet Grooming", Pets;

    BankFees => "BANK_FEES", "Bank Fees", Banking;
    Investments => "INVESTMENTS", "Investments", Banking;

    StreamingServices => "STREAMING_SERVICES", "Streaming", Streaming;
    VideoStreaming => "VIDEO_STREAMING", "Video Streaming", Streaming;
    MusicStreaming => "MUSIC_STREAMING", "Music Streaming", Streaming;
    CloudStorage => "CLOUD_STORAGE", "Cloud Storage", Streaming;
    DigitalMagazines => "DIGITAL_MAGAZINES", "Digital Magazines", Streaming;
    NewsSubscriptions => "NEWS_SUBSCRIPTIONS", "News", Streaming;

    Hotels => "HOTELS", "Hotels", Travel;
    Flights => "FLIGHTS", "Flights", Travel;
    CarRental => "CAR_RENTAL", "Car Rental", Travel;
    Tours => "TOURS", "Tours", Travel;

    Salary => "SALARY", "Salary", Income;
    Freelancing => "FREELANCING", "Freelancing", Income;
    InvestmentIncome => "INVESTMENT_INCOME", "Investment Income", Income;
    Refunds => "REFUNDS", "Refunds", Income;
    RentalIncome => "RENTAL_INCOME", "Rental Income", Income;

    Other => "OTHER", "Other", General;
}

/// Returns every user-selectable category in a fixed order.
///
/// `TRANSFER` is assigned by the transfer flow and never offered to users,
/// so it is not part of this list.
pub fn all_categories() -> &'static [Category] {
    SELECTABLE
}

impl Category {
    /// Whether the category can be picked by a user for a movement.
    pub fn is_selectable(&self) -> bool {
        *self != Category::Transfer
    }

    /// Categories that belong to `group`, in presentation order.
    pub fn in_group(group: CategoryGroup) -> Vec<Category> {
        SELECTABLE
            .iter()
            .copied()
            .filter(|category| category.group() == group)
            .collect()
    }

    fn closest_code(input: &str) -> Option<&'static str> {
        let mut candidates: Vec<_> = SELECTABLE
            .iter()
            .map(|category| (levenshtein(category.code(), input), category.code()))
            .collect();
        candidates.sort_by_key(|(distance, _)| *distance);
        candidates
            .first()
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .map(|(_, code)| *code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = BeehiveError;

    /// Accepts wire codes in any case, with spaces or dashes in place of
    /// underscores (`"coffee shops"`, `"Coffee-Shops"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|ch| match ch {
                ' ' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();
        if normalized == Category::Transfer.code() {
            return Ok(Category::Transfer);
        }
        SELECTABLE
            .iter()
            .copied()
            .find(|category| category.code() == normalized)
            .ok_or_else(|| BeehiveError::InvalidCategory {
                input: s.to_string(),
                suggestion: Category::closest_code(&normalized),
            })
    }
}
