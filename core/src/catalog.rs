use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Calculator,
    Atom,
    Zap,
    Settings,
    Building,
    Coffee,
}

/// One showcased application. All fields are static content; behavior lives
/// in the carousel and launch modules.
#[derive(Clone, Copy, Debug)]
pub struct AppEntry {
    pub id: u32,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub color: &'static str,
    pub features: &'static [&'static str],
}

impl AppEntry {
    /// Screenshot path convention: `assets/app-<id>.png`. The frontend falls
    /// back to a placeholder tile when the asset is missing.
    pub fn screenshot_src(&self) -> String {
        format!("assets/app-{}.png", self.id)
    }

    pub fn launch_url(&self) -> Option<&'static str> {
        crate::launch::launch_url(self.name)
    }
}

/// Gradient tokens the stylesheet defines a `tile--<token>` class for.
pub const COLOR_TOKENS: &[&str] = &[
    "blue-purple",
    "green-teal",
    "purple-pink",
    "orange-red",
    "cyan-blue",
    "yellow-orange",
];

pub const APP_CATALOG: &[AppEntry] = &[
    AppEntry {
        id: 1,
        name: "XRDlicious",
        title: "Powder Diffraction and More",
        description: "Online calculator of partial radial distribution function (PRDF), \
            global RDF, and powder XRD/ND patterns for crystal structures. Experimental \
            powder diffraction file format conversion. MP, AFLOW, and COD databases \
            search interface.",
        icon: IconKind::Calculator,
        color: "blue-purple",
        features: &[
            "PRDF Calculation",
            "Global RDF Analysis",
            "XRD/ND Patterns",
            "Crystal Structure Tools",
        ],
    },
    AppEntry {
        id: 2,
        name: "ICET & ATAT SQS",
        title: "Special Quasi Random Structures",
        description: "Intuitive interface for ICET and ATAT generation of special quasi \
            random structures (SQS) to simulate random alloys.",
        icon: IconKind::Atom,
        color: "green-teal",
        features: &[
            "SQS Generation",
            "ICET Integration",
            "ATAT Compatibility",
            "Materials Modeling",
        ],
    },
    AppEntry {
        id: 3,
        name: "MACE GUI",
        title: "MACE MLIP",
        description: "GUI for running simulations with machine learning MACE interatomic \
            potential. Geometry optimization, formation energies, elastic properties, \
            phonons.",
        icon: IconKind::Zap,
        color: "purple-pink",
        features: &[
            "MACE Integration",
            "Geometry Optimization",
            "Elastic Properties",
            "Phonons",
        ],
    },
    AppEntry {
        id: 4,
        name: "VASP Helper",
        title: "VASP Automation Suite",
        description: "GUI for automatic creation of POTCAR for POSCAR and calculations of \
            energy cut-off (Ecut) and k-space sampling convergence in VASP DFT \
            calculations.",
        icon: IconKind::Settings,
        color: "orange-red",
        features: &[
            "POTCAR Generation",
            "Ecut Convergence",
            "K-point Sampling",
            "VASP Automation",
        ],
    },
    AppEntry {
        id: 5,
        name: "Point Defects Generator",
        title: "Crystal Defect Modeling",
        description: "Online application for creating supercells and random point defects \
            in crystal structures. Interstitials, substitutes, vacancies.",
        icon: IconKind::Building,
        color: "cyan-blue",
        features: &[
            "Supercell Creation",
            "Point Defects",
            "Random Generation",
            "Crystal Structures",
        ],
    },
    AppEntry {
        id: 6,
        name: "Quiz Dung Game",
        title: "Educational RPG Game",
        description: "Calculate correctly math equations and answer quiz questions to beat \
            monsters and progress through a dungeon! Static Streamlit app combining \
            education with gaming.",
        icon: IconKind::Coffee,
        color: "yellow-orange",
        features: &[
            "Math Equations",
            "Quiz Questions",
            "RPG Elements",
            "Educational Gaming",
        ],
    },
];

pub fn entry_by_id(id: u32) -> Option<&'static AppEntry> {
    APP_CATALOG.iter().find(|entry| entry.id == id)
}

pub fn entry_by_name(name: &str) -> Option<&'static AppEntry> {
    let trimmed = name.trim();
    APP_CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(trimmed))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    DuplicateId { id: u32 },
    EmptyName { id: u32 },
    UnknownColor { id: u32, color: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no entries"),
            CatalogError::DuplicateId { id } => write!(f, "duplicate entry id {id}"),
            CatalogError::EmptyName { id } => write!(f, "entry {id} has an empty name"),
            CatalogError::UnknownColor { id, color } => {
                write!(f, "entry {id} references unknown color token '{color}'")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Startup validation of the catalog table. Ids must be unique, names
/// non-empty, and every color token must resolve against [`COLOR_TOKENS`].
/// The frontend refuses to mount when this fails.
pub fn validate_catalog(entries: &[AppEntry]) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::Empty);
    }
    for (pos, entry) in entries.iter().enumerate() {
        if entries[..pos].iter().any(|other| other.id == entry.id) {
            return Err(CatalogError::DuplicateId { id: entry.id });
        }
        if entry.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { id: entry.id });
        }
        if !COLOR_TOKENS.contains(&entry.color) {
            return Err(CatalogError::UnknownColor {
                id: entry.id,
                color: entry.color.to_string(),
            });
        }
    }
    Ok(())
}
