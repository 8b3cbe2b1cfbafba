//! Static keyword table backing category suggestions.
//!
//! Keywords are lowercase substrings in English, Portuguese, French and Dutch.
//! Several mappings may point at the same category, and one keyword may appear
//! under more than one category (`gas` is both fuel and the utility).

use super::Category;

/// A group of keywords that all vote for one category.
#[derive(Debug, Clone, Copy)]
pub struct KeywordMapping {
    pub keywords: &'static [&'static str],
    pub category: Category,
}

const fn map(keywords: &'static [&'static str], category: Category) -> KeywordMapping {
    KeywordMapping { keywords, category }
}

pub const KEYWORD_MAPPINGS: &[KeywordMapping] = &[
    // Housing
    map(&["rent", "aluguer", "loyer", "huur", "renda"], Category::Rent),
    map(
        &["property tax", "imi", "taxe foncière", "imposto"],
        Category::PropertyTaxes,
    ),
    map(
        &[
            "repair",
            "maintenance",
            "plumber",
            "electrician",
            "reparação",
            "caldeira",
            "manutenção",
            "revisão",
            "aquecimento",
            "canalização",
            "electricista",
        ],
        Category::HomeMaintenanceRepairs,
    ),
    map(
        &["home insurance", "house insurance", "seguro casa", "seguro"],
        Category::HomeInsurance,
    ),
    map(
        &["furniture", "ikea", "sofa", "bed", "table", "chair"],
        Category::HouseholdSuppliesFurniture,
    ),
    // Transportation
    map(
        &["fuel", "gas", "petrol", "gasolina", "gasoleo", "essence", "benzine"],
        Category::Fuel,
    ),
    map(
        &["metro", "bus", "tram", "train", "stib", "mivb", "transport public"],
        Category::PublicTransport,
    ),
    map(&["uber", "lyft", "taxi", "cabify"], Category::Uber),
    map(
        &["car repair", "mechanic", "oil change", "tire", "pneu", "mecânico"],
        Category::CarMaintenance,
    ),
    map(&["parking", "estacionamento", "parkeren"], Category::Parking),
    map(
        &["car insurance", "auto insurance", "seguro auto"],
        Category::VehicleInsurance,
    ),
    map(&["toll", "portagem", "péage", "tol"], Category::Tolls),
    // Shopping
    map(
        &["shopping", "mall", "store", "loja", "magasin"],
        Category::Shopping,
    ),
    map(
        &["clothes", "clothing", "zara", "h&m", "hm", "fashion", "roupa"],
        Category::Clothing,
    ),
    map(
        &[
            "phone",
            "laptop",
            "computer",
            "tablet",
            "electronics",
            "fnac",
            "worten",
            "apple",
        ],
        Category::Electronics,
    ),
    map(
        &["gift", "presente", "cadeau", "birthday", "aniversário"],
        Category::Gifts,
    ),
    map(
        &["beauty", "cosmetics", "makeup", "perfume", "sephora"],
        Category::BeautyCosmetics,
    ),
    // Food & Dining
    map(
        &[
            "grocery",
            "supermarket",
            "auchan",
            "carrefour",
            "lidl",
            "aldi",
            "continente",
            "pingo doce",
            "delhaize",
            "colruyt",
        ],
        Category::Groceries,
    ),
    map(
        &["restaurant", "dinner", "lunch", "restaurante", "jantar"],
        Category::Restaurants,
    ),
    map(
        &["mcdonalds", "burger king", "kfc", "fast food", "quick"],
        Category::FastFood,
    ),
    map(
        &["coffee", "starbucks", "café", "cafe"],
        Category::CoffeeShops,
    ),
    map(
        &["bar", "pub", "beer", "wine", "alcohol", "cerveja", "vinho"],
        Category::AlcoholBars,
    ),
    map(&["food", "meal", "comida", "refeição"], Category::FoodDrinks),
    // Entertainment
    map(&["cinema", "movie", "theater", "filme"], Category::Movies),
    map(
        &["concert", "festival", "event", "ticket", "show"],
        Category::Events,
    ),
    map(
        &["game", "playstation", "xbox", "nintendo", "steam", "gaming"],
        Category::Games,
    ),
    map(
        &["club", "nightclub", "disco", "nightlife"],
        Category::Nightlife,
    ),
    map(&["hobby", "craft", "art supplies"], Category::Hobbies),
    map(
        &["gym", "fitness", "sport", "academia", "basic fit", "jims"],
        Category::Gym,
    ),
    // Technology & Services
    map(
        &["software", "app", "subscription", "adobe", "microsoft"],
        Category::SoftwareSubscriptions,
    ),
    map(
        &["internet", "wifi", "broadband", "scarlet", "proximus"],
        Category::InternetServices,
    ),
    map(
        &[
            "mobile",
            "phone plan",
            "vodafone",
            "orange",
            "meo",
            "nos",
            "telemovel",
        ],
        Category::MobilePhonePlans,
    ),
    // Utilities
    map(&["water", "água", "eau"], Category::Water),
    map(
        &["electricity", "eletricidade", "électricité", "edp"],
        Category::Electricity,
    ),
    map(&["gas", "gás", "heating"], Category::Gas),
    // Business
    map(
        &["office", "supplies", "stationery", "printer"],
        Category::OfficeSupplies,
    ),
    map(
        &["business travel", "conference", "hotel work"],
        Category::BusinessTravel,
    ),
    map(
        &["lawyer", "accountant", "consultant", "professional"],
        Category::ProfessionalServices,
    ),
    // Education
    map(
        &["course", "class", "school", "university", "tuition", "aula"],
        Category::Education,
    ),
    map(
        &["udemy", "coursera", "online course", "learning"],
        Category::OnlineCourses,
    ),
    // Insurance
    map(
        &["health insurance", "seguro saúde", "mutuelle"],
        Category::HealthInsurance,
    ),
    map(&["life insurance", "seguro vida"], Category::LifeInsurance),
    map(
        &["travel insurance", "seguro viagem"],
        Category::TravelInsurance,
    ),
    // Health & Medical
    map(
        &["pharmacy", "medicine", "farmácia", "medication"],
        Category::Pharmacy,
    ),
    map(
        &["doctor", "hospital", "medical", "clinic", "médico"],
        Category::Medical,
    ),
    map(
        &["therapy", "therapist", "psychologist", "terapeuta"],
        Category::Therapy,
    ),
    // Pets
    map(
        &["pet food", "dog food", "cat food", "ração"],
        Category::PetFood,
    ),
    map(&["vet", "veterinary", "veterinário"], Category::VetVisits),
    map(
        &["pet shop", "pet store", "pet accessories"],
        Category::PetAccessories,
    ),
    map(&["grooming", "pet groomer"], Category::PetGrooming),
    // Banking & Investments
    map(
        &["bank fee", "commission", "taxa bancária"],
        Category::BankFees,
    ),
    map(
        &["investment", "stock", "etf", "crypto", "bitcoin"],
        Category::Investments,
    ),
    // Streaming & Subscriptions
    map(
        &["netflix", "hbo", "disney", "video streaming", "iptv"],
        Category::VideoStreaming,
    ),
    map(
        &["spotify", "apple music", "music streaming"],
        Category::MusicStreaming,
    ),
    map(
        &["cloud", "dropbox", "google drive", "icloud", "google"],
        Category::CloudStorage,
    ),
    map(
        &["magazine", "news", "newspaper", "jornal"],
        Category::NewsSubscriptions,
    ),
    // Travel
    map(
        &["hotel", "booking", "airbnb", "accommodation"],
        Category::Hotels,
    ),
    map(
        &["flight", "plane", "airline", "ryanair", "tap", "voo"],
        Category::Flights,
    ),
    map(
        &["car rental", "rent a car", "hertz", "sixt"],
        Category::CarRental,
    ),
    map(
        &["tour", "excursion", "tourist", "turismo"],
        Category::Tours,
    ),
    // Income
    map(
        &["salary", "salário", "wage", "paycheck"],
        Category::Salary,
    ),
    map(
        &["freelance", "freelancing", "consulting"],
        Category::Freelancing,
    ),
    map(
        &["dividend", "investment income", "interest"],
        Category::InvestmentIncome,
    ),
    map(&["refund", "reembolso", "return"], Category::Refunds),
    map(
        &["rental income", "rent income", "aluguer"],
        Category::RentalIncome,
    ),
];

/// Categories shown when a description yields no suggestions.
pub const DEFAULT_SUGGESTIONS: &[Category] = &[
    Category::Groceries,
    Category::Restaurants,
    Category::Fuel,
    Category::Shopping,
    Category::Rent,
    Category::Electricity,
    Category::Water,
    Category::Gym,
    Category::Entertainment,
    Category::Health,
    Category::Other,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::all_categories;

    #[test]
    fn keywords_are_lowercase_and_trimmed() {
        for mapping in KEYWORD_MAPPINGS {
            for keyword in mapping.keywords {
                assert_eq!(*keyword, keyword.to_lowercase().as_str());
                assert_eq!(*keyword, keyword.trim());
                assert!(!keyword.is_empty());
            }
        }
    }

    #[test]
    fn every_mapped_category_is_selectable() {
        for mapping in KEYWORD_MAPPINGS {
            assert!(
                all_categories().contains(&mapping.category),
                "{} missing from vocabulary",
                mapping.category
            );
        }
    }
}
