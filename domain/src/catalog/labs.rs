//! Virtual lab catalog: classes, experiments and per-lab content

use serde::Serialize;

/// A school class grouping experiments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabClass {
    pub id: &'static str,
    pub title: &'static str,
}

/// Broad technique an experiment teaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentKind {
    Microscopy,
    Chemical,
    Molecular,
}

impl ExperimentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentKind::Microscopy => "microscopy",
            ExperimentKind::Chemical => "chemical",
            ExperimentKind::Molecular => "molecular",
        }
    }
}

impl std::fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entry in a class's experiment list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperimentSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ExperimentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VivaPair {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Full teaching content for one lab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabDetail {
    pub name: &'static str,
    pub theory: &'static str,
    pub procedure: &'static [&'static str],
    pub guide: &'static str,
    pub viva: &'static [VivaPair],
}

impl LabDetail {
    /// Detail returned for lab ids the catalog does not know
    pub const EMPTY: LabDetail = LabDetail {
        name: "",
        theory: "",
        procedure: &[],
        guide: "",
        viva: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

const fn viva(question: &'static str, answer: &'static str) -> VivaPair {
    VivaPair { question, answer }
}

const fn experiment(id: &'static str, title: &'static str, kind: ExperimentKind) -> ExperimentSummary {
    ExperimentSummary { id, title, kind }
}

static CLASSES: [LabClass; 4] = [
    LabClass { id: "class-9", title: "Class 9 - Science" },
    LabClass { id: "class-10", title: "Class 10 - Science" },
    LabClass { id: "class-11", title: "Class 11 - Biology" },
    LabClass { id: "class-12", title: "Class 12 - Biology" },
];

static CLASS_9: [ExperimentSummary; 2] = [
    experiment("onion-peel", "Onion Peel Cell Observation", ExperimentKind::Microscopy),
    experiment("plant-cells", "Plant Cell Structure Study", ExperimentKind::Microscopy),
];

static CLASS_10: [ExperimentSummary; 2] = [
    experiment("stomata", "Stomatal Observation", ExperimentKind::Microscopy),
    experiment("food-test", "Food Test Experiments", ExperimentKind::Chemical),
];

static CLASS_11: [ExperimentSummary; 2] = [
    experiment("mitosis", "Mitosis Cell Division", ExperimentKind::Microscopy),
    experiment("dna-extract", "DNA Extraction from Onion", ExperimentKind::Molecular),
];

static CLASS_12: [ExperimentSummary; 2] = [
    experiment("pcr", "PCR Simulation", ExperimentKind::Molecular),
    experiment("gel-electro", "Gel Electrophoresis", ExperimentKind::Molecular),
];

static LABS: [(&str, LabDetail); 8] = [
    (
        "onion-peel",
        LabDetail {
            name: "Onion Peel Cell Observation",
            theory: "The onion epidermal peel experiment is a fundamental microscopy technique used to study plant cell structure. Onion epidermal cells are ideal for observation because they are large, rectangular in shape, and arranged in a regular brick-like pattern. These cells lack chloroplasts, making the internal structures clearly visible. Key observations include cell wall, cytoplasm, nucleus, and large central vacuole. Iodine solution stains the nucleus brown-purple due to its affinity for chromatin.",
            procedure: &[
                "Select a fresh, firm onion bulb and remove the dry outer layers",
                "Using forceps, carefully peel a thin, transparent epidermal layer from the inner fleshy scales",
                "Transfer the peel to a watch glass containing distilled water using forceps",
                "Cut the peel to 1cm2 size and transfer to a clean glass slide using a brush",
                "Add 2-3 drops of iodine solution to stain the cells and wait 2-3 minutes",
                "Remove excess stain with a dropper, add glycerine drop, then gently lower coverslip at 45 degree angle",
                "Observe first under low power 10X, then switch to high power 40X objective",
            ],
            guide: "CRITICAL TIPS: Use only inner fleshy layers. Peel must be extremely thin. Lower coverslip slowly at 45 degree angle to prevent air bubbles. Use fresh iodine solution. Wipe slide edges clean before observation.",
            viva: &[
                viva("What is the shape of onion epidermal cells?", "Rectangular/brick-shaped"),
                viva("Why is iodine used as a stain?", "Stains nucleus chromatin brown-purple"),
                viva("Name 4 cell organelles visible in this preparation", "Cell wall, cytoplasm, nucleus, vacuole"),
                viva("Why onion peel and not leaf peel?", "No chloroplasts, thin transparent epidermis"),
                viva("What would happen if coverslip had air bubbles?", "Dark circular artifacts obscure view"),
            ],
        },
    ),
    (
        "plant-cells",
        LabDetail {
            name: "Plant Cell Structure Study",
            theory: "Plant cells exhibit distinct structural features that differentiate them from animal cells. This experiment uses peels from different plant parts to observe variations in cell structure. Epidermal peels reveal cell wall rigidity, while cheek cells serve as comparison. Key plant cell features: Cell wall provides shape/rigidity, large central vacuole 80-90 percent cell volume, plastids chloroplasts in green tissues, plasmodesmata cell-cell connections.",
            procedure: &[
                "Prepare peels from onion non-green, tradescantia leaf green, and human cheek",
                "Follow same staining procedure as onion peel for all samples",
                "Mount each on separate slides with proper labeling",
                "Observe under microscope and draw labeled diagrams",
                "Compare plant vs animal cell features systematically",
            ],
            guide: "COMPARISON TABLE: Feature Plant Cell Animal Cell - Cell Wall Present Absent - Shape Fixed Round/Irregular - Vacuole Large central Small/multiple - Plastids Present Absent.",
            viva: &[
                viva("Name the non-living rigid layer outside cell membrane", "Cell wall"),
                viva("What gives green color to leaf cells?", "Chloroplasts"),
                viva("Which cell organelle occupies 90 percent of plant cell volume?", "Central vacuole"),
                viva("Why animal cells lack cell wall?", "Need flexibility for movement"),
                viva("What stains cytoplasm in plant cells?", "Iodine solution"),
            ],
        },
    ),
    (
        "stomata",
        LabDetail {
            name: "Stomatal Observation",
            theory: "Stomata are specialized epidermal structures for gas exchange and transpiration control. Each stoma consists of two bean-shaped guard cells that regulate opening/closing via turgor pressure changes. Located primarily on leaf undersurface, stomatal density varies 100-1000 per mm2. Guard cells contain chloroplasts and regulate CO2 intake for photosynthesis while minimizing water loss.",
            procedure: &[
                "Select healthy dicot leaf hibiscus/tradescantia, peel lower epidermis",
                "Stain with safranin red or iodine solution",
                "Mount on slide, observe under high power 40X",
                "Count stomata in 1mm2 area for density calculation",
                "Draw labeled diagram showing guard cells and subsidiary cells",
            ],
            guide: "IDENTIFICATION: Guard cells Bean-shaped chloroplast-rich, Stoma Pore between guard cells.",
            viva: &[
                viva("What controls stomatal opening/closing?", "Turgor pressure in guard cells"),
                viva("Why stomata mostly on leaf underside?", "Reduces water loss less sunlight"),
                viva("Name hormone that closes stomata during stress", "Abscisic acid ABA"),
                viva("Function of chloroplasts in guard cells?", "Produce sugars osmotic influx opening"),
                viva("What is stomatal index?", "Percentage of stomata to total epidermal cells"),
            ],
        },
    ),
    (
        "food-test",
        LabDetail {
            name: "Food Test Experiments",
            theory: "Biochemical tests identify major biomolecules using specific color reactions. Benedict's test detects reducing sugars green/yellow/red precipitate. Biuret test detects proteins violet color. Iodine test detects starch blue-black complex. Sudan III detects lipids red stain in oily layer.",
            procedure: &[
                "Prepare food samples potato, milk, sugar solution, egg white",
                "Test each for starch iodine, reducing sugar Benedict, protein Biuret, lipid Sudan III",
                "Record color changes and positive/negative results",
                "Prepare control samples pure glucose, albumin for comparison",
            ],
            guide: "COLOR CHART: Starch + Iodine = Blue-black, Reducing sugar + Benedict = Green-Yellow-Red ppt, Protein + Biuret = Violet, Lipid + Sudan III = Red oily layer.",
            viva: &[
                viva("Which test gives blue-black color?", "Starch + Iodine test"),
                viva("Benedict test detects what type of sugar?", "Reducing sugars glucose, fructose"),
                viva("Biuret reagent contains what ions?", "Cu2+ in alkaline medium"),
                viva("Why Sudan III is used for fats?", "Fat soluble red dye"),
                viva("What is negative control in food tests?", "Sample known to lack that biomolecule"),
            ],
        },
    ),
    (
        "mitosis",
        LabDetail {
            name: "Mitosis Cell Division",
            theory: "Mitosis produces identical daughter cells for growth/repair. Onion root tip meristematic cells divide rapidly every 12-24 hours, ideal for observing all stages. Carnoy's fixative preserves chromosome structure while acetocarmine staining enhances chromatin visibility.",
            procedure: &[
                "Grow onion in water 4-5 days, collect 1-2cm root tips",
                "Fix in Carnoy's solution 3:1 ethanol:acetic acid for 24hrs",
                "Hydrolyze in 1N HCl at 60C for 5-10 mins",
                "Stain with 1 percent acetocarmine at 60C for 20-30 mins",
                "Squash gently between slide and coverslip",
                "Observe stages under 40X objective, count 100 cells",
            ],
            guide: "MITOTIC INDEX: MI = Dividing cells / Total cells x 100.",
            viva: &[
                viva("Which onion tissue shows maximum mitosis?", "Root tip meristem"),
                viva("Purpose of HCl hydrolysis?", "Softens middle lamella"),
                viva("Acetocarmine stains what?", "DNA/chromatin red"),
                viva("Which stage has chromosomes at equator?", "Metaphase"),
                viva("What is mitotic index?", "Percentage of dividing cells in population"),
            ],
        },
    ),
    (
        "dna-extract",
        LabDetail {
            name: "DNA Extraction from Onion",
            theory: "DNA extraction disrupts cell/tissue barriers to release nucleic acids. Onion cells lack lignified walls, making mechanical lysis easier. Detergent dissolves lipid membranes, salt neutralizes DNA phosphates precipitation, cold ethanol dehydrates and precipitates DNA strands.",
            procedure: &[
                "Chop 2g onion, blend with 20ml extraction buffer detergent + salt",
                "Filter through muslin cloth remove debris",
                "Add equal volume ice-cold ethanol to filtrate",
                "DNA precipitates as white strands at interface",
                "Spool DNA using glass rod, transfer to microtube",
            ],
            guide: "Use ice-cold ethanol for maximum DNA precipitation.",
            viva: &[
                viva("Role of detergent in DNA extraction?", "Dissolves cell/lipid membranes"),
                viva("Why use ice-cold ethanol?", "Maximizes DNA precipitation"),
                viva("Function of salt/NaCl?", "Neutralizes DNA negative charges"),
                viva("Why onion preferred?", "Soft tissue, high DNA content"),
                viva("What does DNA look like after precipitation?", "White cotton-like strands"),
            ],
        },
    ),
    (
        "pcr",
        LabDetail {
            name: "PCR Simulation",
            theory: "Polymerase Chain Reaction PCR amplifies specific DNA segments exponentially. Thermal cycling: Denaturation 95C, Annealing 55C, Extension 72C. Taq polymerase heat-stable extends primers every cycle.",
            procedure: &[
                "Prepare reaction mix: Template DNA, primers, dNTPs, Taq polymerase, buffer",
                "Load into thermal cycler with positive/negative controls",
                "Program: 95C/5min - 95C/30s, 55C/30s, 72C/1min x30 - 72C/5min",
                "Analyze products via gel electrophoresis",
                "Visualize bands under UV transilluminator",
            ],
            guide: "PCR success depends on optimal MgCl2 concentration.",
            viva: &[
                viva("What does PCR stand for?", "Polymerase Chain Reaction"),
                viva("Why Taq polymerase used?", "Thermostable survives 95C"),
                viva("Purpose of annealing step?", "Primer binding to template"),
                viva("How many copies after 30 cycles?", "~1 billion 2^30"),
                viva("What is denaturation temperature?", "95C - separates DNA strands"),
            ],
        },
    ),
    (
        "gel-electro",
        LabDetail {
            name: "Gel Electrophoresis",
            theory: "Agarose gel electrophoresis separates DNA fragments by size through porous matrix under electric field. DNA negative charge migrates toward anode. Smaller fragments move faster through gel pores.",
            procedure: &[
                "Prepare 1 percent agarose gel in TAE buffer + EtBr",
                "Pour gel, set comb, solidify 30min",
                "Load: Ladder + samples + loading dye",
                "Run at 80V for 45-60min",
                "Visualize under UV transilluminator",
            ],
            guide: "1 percent agarose best for 0.5-10kb fragments.",
            viva: &[
                viva("Why DNA moves toward red electrode?", "DNA negatively charged PO4 groups"),
                viva("Smaller fragments move faster because?", "Easier through agarose pores"),
                viva("Purpose of loading dye?", "Density + tracking dye bromophenol blue"),
                viva("Why gel percentage affects resolution?", "Pore size inversely proportional"),
                viva("What stains DNA in gel?", "Ethidium bromide"),
            ],
        },
    ),
];

/// Static lab content tables
pub struct LabCatalog;

impl LabCatalog {
    pub fn classes() -> &'static [LabClass] {
        &CLASSES
    }

    pub fn class(class_id: &str) -> Option<&'static LabClass> {
        CLASSES.iter().find(|c| c.id == class_id)
    }

    /// Experiments offered for a class; empty for unknown classes
    pub fn experiments(class_id: &str) -> &'static [ExperimentSummary] {
        match class_id {
            "class-9" => &CLASS_9,
            "class-10" => &CLASS_10,
            "class-11" => &CLASS_11,
            "class-12" => &CLASS_12,
            _ => &[],
        }
    }

    /// Content for a lab; [`LabDetail::EMPTY`] for unknown ids
    pub fn detail(lab_id: &str) -> &'static LabDetail {
        LABS.iter()
            .find(|(id, _)| *id == lab_id)
            .map(|(_, detail)| detail)
            .unwrap_or(&LabDetail::EMPTY)
    }

    pub fn contains(lab_id: &str) -> bool {
        LABS.iter().any(|(id, _)| *id == lab_id)
    }
}
