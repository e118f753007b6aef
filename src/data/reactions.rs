use super::strings;
use crate::catalog::{ClassLevel, Difficulty, Reaction, ReactionCategory};

use ClassLevel::{Eleven, Twelve};
use Difficulty::{Easy, Hard, Medium};
use ReactionCategory::{Inorganic, Organic, Physical};

struct Entry {
    id: &'static str,
    title: &'static str,
    category: ReactionCategory,
    equation: &'static str,
    description: &'static str,
    mechanism: Option<&'static str>,
    steps: &'static [&'static str],
    conditions: &'static [&'static str],
    uses: &'static [&'static str],
    exceptions: &'static [&'static str],
    difficulty: Difficulty,
    class: ClassLevel,
    chapter: &'static str,
    kind: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "haber-process",
        title: "Haber Process",
        category: Inorganic,
        equation: "N2(g) + 3H2(g) ⇌ 2NH3(g)   ΔH = -92.4 kJ/mol",
        description: "Industrial synthesis of ammonia from nitrogen and hydrogen over an iron catalyst. \
                      Le Chatelier's principle explains the choice of high pressure and moderate temperature.",
        mechanism: Some("N2 and H2 adsorb dissociatively on the iron surface; surface N and H atoms combine stepwise to NH3, which desorbs."),
        steps: &[
            "Purify and mix N2 and H2 in a 1:3 ratio",
            "Compress to about 200 atm",
            "Pass over finely divided iron with molybdenum promoter at about 700 K",
            "Cool the gas mixture to liquefy ammonia and recycle unreacted gases",
        ],
        conditions: &["200 atm", "700 K", "Fe catalyst with Mo promoter"],
        uses: &["Fertiliser manufacture", "Nitric acid production"],
        exceptions: &["Higher temperature lowers the equilibrium yield even though it increases the rate"],
        difficulty: Medium,
        class: Eleven,
        chapter: "Equilibrium",
        kind: "synthesis",
    },
    Entry {
        id: "contact-process",
        title: "Contact Process",
        category: Inorganic,
        equation: "2SO2(g) + O2(g) ⇌ 2SO3(g)",
        description: "Catalytic oxidation of sulfur dioxide, the key step in manufacturing sulfuric acid.",
        mechanism: None,
        steps: &[
            "Burn sulfur or roast sulfide ores to obtain SO2",
            "Oxidise SO2 to SO3 over V2O5",
            "Absorb SO3 in concentrated H2SO4 to form oleum",
            "Dilute oleum with water",
        ],
        conditions: &["2 bar", "720 K", "V2O5 catalyst"],
        uses: &["Sulfuric acid production"],
        exceptions: &["SO3 is not dissolved directly in water because it forms a dense acid mist"],
        difficulty: Medium,
        class: Twelve,
        chapter: "The p-Block Elements",
        kind: "oxidation",
    },
    Entry {
        id: "ostwald-process",
        title: "Ostwald Process",
        category: Inorganic,
        equation: "4NH3(g) + 5O2(g) → 4NO(g) + 6H2O(g)",
        description: "Catalytic oxidation of ammonia to nitric oxide, which is converted to nitric acid.",
        mechanism: None,
        steps: &[
            "Oxidise NH3 over a Pt/Rh gauze",
            "Oxidise NO to NO2 with air",
            "Absorb NO2 in water to give HNO3",
        ],
        conditions: &["500 K", "9 bar", "Pt/Rh gauze catalyst"],
        uses: &["Nitric acid for explosives and fertilisers"],
        exceptions: &[],
        difficulty: Medium,
        class: Twelve,
        chapter: "The p-Block Elements",
        kind: "oxidation",
    },
    Entry {
        id: "solvay-process",
        title: "Solvay Process",
        category: Inorganic,
        equation: "NaCl + NH3 + CO2 + H2O → NaHCO3 + NH4Cl",
        description: "Ammonia-soda process for washing soda; the sparingly soluble bicarbonate precipitates and is heated to the carbonate.",
        mechanism: None,
        steps: &[
            "Saturate brine with ammonia",
            "Bubble CO2 through the ammoniacal brine",
            "Filter off NaHCO3 and heat it to obtain Na2CO3",
            "Recover ammonia by treating NH4Cl with Ca(OH)2",
        ],
        conditions: &["Cooled ammoniacal brine"],
        uses: &["Washing soda", "Glass manufacture"],
        exceptions: &["Cannot be used for potassium carbonate because KHCO3 is too soluble"],
        difficulty: Easy,
        class: Eleven,
        chapter: "The s-Block Elements",
        kind: "precipitation",
    },
    Entry {
        id: "thermite-reaction",
        title: "Thermite Reaction",
        category: Inorganic,
        equation: "Fe2O3 + 2Al → Al2O3 + 2Fe   ΔH = -852 kJ/mol",
        description: "Aluminium reduces iron(III) oxide in a strongly exothermic displacement that produces molten iron.",
        mechanism: None,
        steps: &["Mix powdered Al and Fe2O3", "Ignite with a magnesium ribbon fuse"],
        conditions: &["High ignition temperature"],
        uses: &["Welding railway tracks", "Repairing heavy machinery"],
        exceptions: &[],
        difficulty: Easy,
        class: Eleven,
        chapter: "Redox Reactions",
        kind: "displacement",
    },
    Entry {
        id: "friedel-crafts-alkylation",
        title: "Friedel-Crafts Alkylation",
        category: Organic,
        equation: "C6H6 + CH3Cl --AlCl3--> C6H5CH3 + HCl",
        description: "Electrophilic substitution of an alkyl group onto an aromatic ring using a Lewis acid catalyst.",
        mechanism: Some("AlCl3 abstracts chloride to form a carbocation electrophile, which attacks the ring to give an arenium ion that loses H+."),
        steps: &[
            "Generate the electrophile with anhydrous AlCl3",
            "Electrophile attacks the benzene ring",
            "Loss of a proton restores aromaticity",
        ],
        conditions: &["Anhydrous AlCl3", "Dry conditions"],
        uses: &["Manufacture of alkylbenzenes"],
        exceptions: &["Fails with strongly deactivated rings such as nitrobenzene", "Primary carbocations may rearrange"],
        difficulty: Medium,
        class: Eleven,
        chapter: "Hydrocarbons",
        kind: "substitution",
    },
    Entry {
        id: "markovnikov-addition",
        title: "Markovnikov Addition of HBr",
        category: Organic,
        equation: "CH3CH=CH2 + HBr → CH3CHBrCH3",
        description: "Electrophilic addition to an unsymmetrical alkene places the hydrogen on the carbon that already holds more hydrogens.",
        mechanism: Some("Protonation gives the more stable secondary carbocation, which bromide then attacks."),
        steps: &["Protonation of the double bond", "Bromide attacks the carbocation"],
        conditions: &["Room temperature", "No peroxides"],
        uses: &["Preparation of alkyl halides"],
        exceptions: &["In presence of peroxides HBr adds anti-Markovnikov (Kharasch effect)"],
        difficulty: Easy,
        class: Eleven,
        chapter: "Hydrocarbons",
        kind: "addition",
    },
    Entry {
        id: "wurtz-reaction",
        title: "Wurtz Reaction",
        category: Organic,
        equation: "2CH3Br + 2Na --dry ether--> CH3CH3 + 2NaBr",
        description: "Coupling of two alkyl halides with sodium in dry ether to give a higher alkane.",
        mechanism: None,
        steps: &["Sodium reduces the alkyl halide", "Two alkyl fragments couple"],
        conditions: &["Dry ether", "Sodium metal"],
        uses: &["Preparation of symmetrical alkanes"],
        exceptions: &["Not useful for methane", "Mixtures of halides give mixtures of alkanes"],
        difficulty: Easy,
        class: Eleven,
        chapter: "Hydrocarbons",
        kind: "coupling",
    },
    Entry {
        id: "sn2-hydrolysis",
        title: "SN2 Hydrolysis of Bromomethane",
        category: Organic,
        equation: "CH3Br + OH- → CH3OH + Br-",
        description: "Bimolecular nucleophilic substitution with backside attack and inversion of configuration.",
        mechanism: Some("Hydroxide attacks carbon opposite the leaving group through a single pentacoordinate transition state."),
        steps: &["Backside attack by OH-", "Simultaneous departure of Br-"],
        conditions: &["Aqueous NaOH", "Polar aprotic solvent favours the reaction"],
        uses: &["Converting alkyl halides to alcohols"],
        exceptions: &["Tertiary halides react by SN1 instead"],
        difficulty: Medium,
        class: Twelve,
        chapter: "Haloalkanes and Haloarenes",
        kind: "substitution",
    },
    Entry {
        id: "aldol-condensation",
        title: "Aldol Condensation",
        category: Organic,
        equation: "2CH3CHO --dil. NaOH--> CH3CH(OH)CH2CHO → CH3CH=CHCHO + H2O",
        description: "Aldehydes or ketones with an alpha hydrogen combine under dilute base to give a beta-hydroxy carbonyl that dehydrates on heating.",
        mechanism: Some("Base forms an enolate that adds to a second carbonyl; the aldol dehydrates by E1cB on heating."),
        steps: &["Enolate formation", "Nucleophilic addition", "Protonation", "Dehydration on heating"],
        conditions: &["Dilute NaOH", "Heat for the condensation product"],
        uses: &["Carbon-carbon bond formation in synthesis"],
        exceptions: &["Carbonyl compounds without alpha hydrogens undergo Cannizzaro reaction instead"],
        difficulty: Hard,
        class: Twelve,
        chapter: "Aldehydes, Ketones and Carboxylic Acids",
        kind: "condensation",
    },
    Entry {
        id: "cannizzaro-reaction",
        title: "Cannizzaro Reaction",
        category: Organic,
        equation: "2HCHO + conc. NaOH → CH3OH + HCOONa",
        description: "Disproportionation of an aldehyde lacking alpha hydrogens into an alcohol and a carboxylate salt.",
        mechanism: Some("Hydroxide adds to one aldehyde, which transfers a hydride to a second aldehyde molecule."),
        steps: &["Hydroxide addition", "Hydride transfer", "Proton exchange"],
        conditions: &["Concentrated NaOH or KOH"],
        uses: &["Preparation of benzyl alcohol"],
        exceptions: &[],
        difficulty: Hard,
        class: Twelve,
        chapter: "Aldehydes, Ketones and Carboxylic Acids",
        kind: "redox",
    },
    Entry {
        id: "fischer-esterification",
        title: "Fischer Esterification",
        category: Organic,
        equation: "CH3COOH + C2H5OH ⇌ CH3COOC2H5 + H2O",
        description: "Acid-catalysed condensation of a carboxylic acid and an alcohol to an ester.",
        mechanism: Some("Protonated carbonyl is attacked by the alcohol; a tetrahedral intermediate loses water."),
        steps: &["Protonate the acid", "Alcohol attacks", "Proton transfer", "Loss of water"],
        conditions: &["Conc. H2SO4", "Heat under reflux"],
        uses: &["Flavours and perfumes"],
        exceptions: &["Equilibrium; remove water to drive it forward"],
        difficulty: Medium,
        class: Twelve,
        chapter: "Aldehydes, Ketones and Carboxylic Acids",
        kind: "condensation",
    },
    Entry {
        id: "n2o5-decomposition",
        title: "Decomposition of N2O5",
        category: Physical,
        equation: "2N2O5(g) → 4NO2(g) + O2(g)",
        description: "Classic first-order gas-phase decomposition used to illustrate integrated rate laws and half-life.",
        mechanism: None,
        steps: &[],
        conditions: &["Gas phase", "318 K"],
        uses: &["Teaching first-order kinetics"],
        exceptions: &[],
        difficulty: Medium,
        class: Twelve,
        chapter: "Chemical Kinetics",
        kind: "decomposition",
    },
    Entry {
        id: "water-electrolysis",
        title: "Electrolysis of Water",
        category: Physical,
        equation: "2H2O(l) → 2H2(g) + O2(g)",
        description: "Electrical energy splits acidified water; hydrogen forms at the cathode and oxygen at the anode.",
        mechanism: None,
        steps: &["Reduction at cathode: 2H+ + 2e- → H2", "Oxidation at anode: 2H2O → O2 + 4H+ + 4e-"],
        conditions: &["Dilute H2SO4 electrolyte", "Inert Pt electrodes"],
        uses: &["Green hydrogen production"],
        exceptions: &[],
        difficulty: Easy,
        class: Twelve,
        chapter: "Electrochemistry",
        kind: "decomposition",
    },
    Entry {
        id: "methane-combustion",
        title: "Combustion of Methane",
        category: Physical,
        equation: "CH4(g) + 2O2(g) → CO2(g) + 2H2O(l)   ΔcH = -890 kJ/mol",
        description: "Standard enthalpy of combustion example used with Hess's law calculations.",
        mechanism: None,
        steps: &[],
        conditions: &["Excess oxygen"],
        uses: &["Domestic cooking gas", "Power generation"],
        exceptions: &["Limited oxygen gives carbon monoxide"],
        difficulty: Easy,
        class: Eleven,
        chapter: "Thermodynamics",
        kind: "combustion",
    },
];

pub(super) fn build() -> Vec<Reaction> {
    ENTRIES
        .iter()
        .map(|e| Reaction {
            id: e.id.to_string(),
            title: e.title.to_string(),
            category: e.category,
            equation: e.equation.to_string(),
            description: e.description.to_string(),
            mechanism: e.mechanism.map(str::to_string),
            steps: strings(e.steps),
            conditions: strings(e.conditions),
            uses: strings(e.uses),
            exceptions: strings(e.exceptions),
            difficulty: e.difficulty,
            class: e.class,
            chapter: e.chapter.to_string(),
            kind: e.kind.to_string(),
        })
        .collect()
}
