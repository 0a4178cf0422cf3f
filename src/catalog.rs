//! Enumerated value pools for the personnel directory.
//!
//! Ranks are listed from most senior to most junior; the record generator
//! relies on that ordering when it maps years of service to a rank.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Service rank, most senior first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "Comptroller General")]
    ComptrollerGeneral,
    #[serde(rename = "Deputy Comptroller General")]
    DeputyComptrollerGeneral,
    #[serde(rename = "Assistant Comptroller General")]
    AssistantComptrollerGeneral,
    #[serde(rename = "Comptroller of Immigration")]
    ComptrollerOfImmigration,
    #[serde(rename = "Deputy Comptroller of Immigration")]
    DeputyComptrollerOfImmigration,
    #[serde(rename = "Assistant Comptroller of Immigration")]
    AssistantComptrollerOfImmigration,
    #[serde(rename = "Chief Superintendent of Immigration")]
    ChiefSuperintendentOfImmigration,
    #[serde(rename = "Superintendent of Immigration")]
    SuperintendentOfImmigration,
    #[serde(rename = "Deputy Superintendent of Immigration")]
    DeputySuperintendentOfImmigration,
    #[serde(rename = "Assistant Superintendent of Immigration I")]
    AssistantSuperintendentOfImmigrationI,
    #[serde(rename = "Assistant Superintendent of Immigration II")]
    AssistantSuperintendentOfImmigrationII,
    #[serde(rename = "Inspector of Immigration")]
    InspectorOfImmigration,
    #[serde(rename = "Assistant Inspector of Immigration")]
    AssistantInspectorOfImmigration,
    #[serde(rename = "Immigration Assistant I")]
    ImmigrationAssistantI,
    #[serde(rename = "Immigration Assistant II")]
    ImmigrationAssistantII,
    #[serde(rename = "Immigration Assistant III")]
    ImmigrationAssistantIII,
}

impl Rank {
    pub const ALL: [Rank; 16] = [
        Rank::ComptrollerGeneral,
        Rank::DeputyComptrollerGeneral,
        Rank::AssistantComptrollerGeneral,
        Rank::ComptrollerOfImmigration,
        Rank::DeputyComptrollerOfImmigration,
        Rank::AssistantComptrollerOfImmigration,
        Rank::ChiefSuperintendentOfImmigration,
        Rank::SuperintendentOfImmigration,
        Rank::DeputySuperintendentOfImmigration,
        Rank::AssistantSuperintendentOfImmigrationI,
        Rank::AssistantSuperintendentOfImmigrationII,
        Rank::InspectorOfImmigration,
        Rank::AssistantInspectorOfImmigration,
        Rank::ImmigrationAssistantI,
        Rank::ImmigrationAssistantII,
        Rank::ImmigrationAssistantIII,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Rank::ComptrollerGeneral => "Comptroller General",
            Rank::DeputyComptrollerGeneral => "Deputy Comptroller General",
            Rank::AssistantComptrollerGeneral => "Assistant Comptroller General",
            Rank::ComptrollerOfImmigration => "Comptroller of Immigration",
            Rank::DeputyComptrollerOfImmigration => "Deputy Comptroller of Immigration",
            Rank::AssistantComptrollerOfImmigration => "Assistant Comptroller of Immigration",
            Rank::ChiefSuperintendentOfImmigration => "Chief Superintendent of Immigration",
            Rank::SuperintendentOfImmigration => "Superintendent of Immigration",
            Rank::DeputySuperintendentOfImmigration => "Deputy Superintendent of Immigration",
            Rank::AssistantSuperintendentOfImmigrationI => "Assistant Superintendent of Immigration I",
            Rank::AssistantSuperintendentOfImmigrationII => "Assistant Superintendent of Immigration II",
            Rank::InspectorOfImmigration => "Inspector of Immigration",
            Rank::AssistantInspectorOfImmigration => "Assistant Inspector of Immigration",
            Rank::ImmigrationAssistantI => "Immigration Assistant I",
            Rank::ImmigrationAssistantII => "Immigration Assistant II",
            Rank::ImmigrationAssistantIII => "Immigration Assistant III",
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

pub const STATE_COMMANDS: [&str; 37] = [
    "Abia",
    "Adamawa",
    "Akwa Ibom",
    "Anambra",
    "Bauchi",
    "Bayelsa",
    "Benue",
    "Borno",
    "Cross River",
    "Delta",
    "Ebonyi",
    "Edo",
    "Ekiti",
    "Enugu",
    "FCT Abuja",
    "Gombe",
    "Imo",
    "Jigawa",
    "Kaduna",
    "Kano",
    "Katsina",
    "Kebbi",
    "Kogi",
    "Kwara",
    "Lagos",
    "Nasarawa",
    "Niger",
    "Ogun",
    "Ondo",
    "Osun",
    "Oyo",
    "Plateau",
    "Rivers",
    "Sokoto",
    "Taraba",
    "Yobe",
    "Zamfara",
];

pub const FIRST_NAMES: [&str; 24] = [
    "Abubakar", "Chioma", "Oluwaseun", "Fatima", "Emeka", "Ngozi", "Ibrahim", "Aisha",
    "Obinna", "Folake", "Musa", "Yetunde", "Chukwuma", "Halima", "Adewale", "Blessing",
    "Usman", "Grace", "Oluwatobi", "Amina", "Tunde", "Chidinma", "Aliyu", "Funke",
];

pub const LAST_NAMES: [&str; 24] = [
    "Okonkwo", "Abdullahi", "Adeyemi", "Mohammed", "Eze", "Balogun", "Abubakar", "Okafor",
    "Yusuf", "Adebayo", "Nwosu", "Garba", "Olumide", "Suleiman", "Nnamdi", "Bakare",
    "Okoro", "Danjuma", "Adekunle", "Mbachu", "Hassan", "Ogundipe", "Ikenna", "Lawal",
];

pub const TRAINING_COURSES: [&str; 14] = [
    "Basic Immigration Training",
    "Border Control Operations",
    "Document Verification & Fraud Detection",
    "Counter-Terrorism Awareness",
    "Passport Issuance Procedures",
    "Visa Processing & Regulations",
    "Human Trafficking Detection",
    "Digital Immigration Systems",
    "Leadership & Management",
    "First Aid & Emergency Response",
    "Firearms Handling & Safety",
    "International Immigration Law",
    "Public Relations & Communication",
    "Cybersecurity Fundamentals",
];

/// Domain used for generated staff email addresses.
pub const EMAIL_DOMAIN: &str = "nis.gov.ng";
