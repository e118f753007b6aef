use super::strings;
use crate::catalog::{Block, Category, Discovery, Element, Level, PhysicalState};

const ALK: Category = Category::AlkaliMetal;
const AE: Category = Category::AlkalineEarthMetal;
const TM: Category = Category::TransitionMetal;
const PTM: Category = Category::PostTransitionMetal;
const MTL: Category = Category::Metalloid;
const NM: Category = Category::Nonmetal;
const HAL: Category = Category::Halogen;
const NG: Category = Category::NobleGas;
const LAN: Category = Category::Lanthanide;
const ACT: Category = Category::Actinide;

const SOL: PhysicalState = PhysicalState::Solid;
const LIQ: PhysicalState = PhysicalState::Liquid;
const GAS: PhysicalState = PhysicalState::Gas;
const UNK: PhysicalState = PhysicalState::Unknown;

use Block::{D, F, P, S};

type Row = (u8, &'static str, &'static str, f64, Category, Block, u8, u8, PhysicalState, &'static str);

// Z, symbol, name, mass, category, block, period, group, state at 298 K, configuration.
// The f-block series carry nominal group 3.
#[rustfmt::skip]
const TABLE: [Row; 118] = [
    (1, "H", "Hydrogen", 1.008, NM, S, 1, 1, GAS, "1s1"),
    (2, "He", "Helium", 4.0026, NG, S, 1, 18, GAS, "1s2"),
    (3, "Li", "Lithium", 6.94, ALK, S, 2, 1, SOL, "[He] 2s1"),
    (4, "Be", "Beryllium", 9.0122, AE, S, 2, 2, SOL, "[He] 2s2"),
    (5, "B", "Boron", 10.81, MTL, P, 2, 13, SOL, "[He] 2s2 2p1"),
    (6, "C", "Carbon", 12.011, NM, P, 2, 14, SOL, "[He] 2s2 2p2"),
    (7, "N", "Nitrogen", 14.007, NM, P, 2, 15, GAS, "[He] 2s2 2p3"),
    (8, "O", "Oxygen", 15.999, NM, P, 2, 16, GAS, "[He] 2s2 2p4"),
    (9, "F", "Fluorine", 18.998, HAL, P, 2, 17, GAS, "[He] 2s2 2p5"),
    (10, "Ne", "Neon", 20.180, NG, P, 2, 18, GAS, "[He] 2s2 2p6"),
    (11, "Na", "Sodium", 22.990, ALK, S, 3, 1, SOL, "[Ne] 3s1"),
    (12, "Mg", "Magnesium", 24.305, AE, S, 3, 2, SOL, "[Ne] 3s2"),
    (13, "Al", "Aluminium", 26.982, PTM, P, 3, 13, SOL, "[Ne] 3s2 3p1"),
    (14, "Si", "Silicon", 28.085, MTL, P, 3, 14, SOL, "[Ne] 3s2 3p2"),
    (15, "P", "Phosphorus", 30.974, NM, P, 3, 15, SOL, "[Ne] 3s2 3p3"),
    (16, "S", "Sulfur", 32.06, NM, P, 3, 16, SOL, "[Ne] 3s2 3p4"),
    (17, "Cl", "Chlorine", 35.45, HAL, P, 3, 17, GAS, "[Ne] 3s2 3p5"),
    (18, "Ar", "Argon", 39.948, NG, P, 3, 18, GAS, "[Ne] 3s2 3p6"),
    (19, "K", "Potassium", 39.098, ALK, S, 4, 1, SOL, "[Ar] 4s1"),
    (20, "Ca", "Calcium", 40.078, AE, S, 4, 2, SOL, "[Ar] 4s2"),
    (21, "Sc", "Scandium", 44.956, TM, D, 4, 3, SOL, "[Ar] 3d1 4s2"),
    (22, "Ti", "Titanium", 47.867, TM, D, 4, 4, SOL, "[Ar] 3d2 4s2"),
    (23, "V", "Vanadium", 50.942, TM, D, 4, 5, SOL, "[Ar] 3d3 4s2"),
    (24, "Cr", "Chromium", 51.996, TM, D, 4, 6, SOL, "[Ar] 3d5 4s1"),
    (25, "Mn", "Manganese", 54.938, TM, D, 4, 7, SOL, "[Ar] 3d5 4s2"),
    (26, "Fe", "Iron", 55.845, TM, D, 4, 8, SOL, "[Ar] 3d6 4s2"),
    (27, "Co", "Cobalt", 58.933, TM, D, 4, 9, SOL, "[Ar] 3d7 4s2"),
    (28, "Ni", "Nickel", 58.693, TM, D, 4, 10, SOL, "[Ar] 3d8 4s2"),
    (29, "Cu", "Copper", 63.546, TM, D, 4, 11, SOL, "[Ar] 3d10 4s1"),
    (30, "Zn", "Zinc", 65.38, TM, D, 4, 12, SOL, "[Ar] 3d10 4s2"),
    (31, "Ga", "Gallium", 69.723, PTM, P, 4, 13, SOL, "[Ar] 3d10 4s2 4p1"),
    (32, "Ge", "Germanium", 72.630, MTL, P, 4, 14, SOL, "[Ar] 3d10 4s2 4p2"),
    (33, "As", "Arsenic", 74.922, MTL, P, 4, 15, SOL, "[Ar] 3d10 4s2 4p3"),
    (34, "Se", "Selenium", 78.971, NM, P, 4, 16, SOL, "[Ar] 3d10 4s2 4p4"),
    (35, "Br", "Bromine", 79.904, HAL, P, 4, 17, LIQ, "[Ar] 3d10 4s2 4p5"),
    (36, "Kr", "Krypton", 83.798, NG, P, 4, 18, GAS, "[Ar] 3d10 4s2 4p6"),
    (37, "Rb", "Rubidium", 85.468, ALK, S, 5, 1, SOL, "[Kr] 5s1"),
    (38, "Sr", "Strontium", 87.62, AE, S, 5, 2, SOL, "[Kr] 5s2"),
    (39, "Y", "Yttrium", 88.906, TM, D, 5, 3, SOL, "[Kr] 4d1 5s2"),
    (40, "Zr", "Zirconium", 91.224, TM, D, 5, 4, SOL, "[Kr] 4d2 5s2"),
    (41, "Nb", "Niobium", 92.906, TM, D, 5, 5, SOL, "[Kr] 4d4 5s1"),
    (42, "Mo", "Molybdenum", 95.95, TM, D, 5, 6, SOL, "[Kr] 4d5 5s1"),
    (43, "Tc", "Technetium", 98.0, TM, D, 5, 7, SOL, "[Kr] 4d5 5s2"),
    (44, "Ru", "Ruthenium", 101.07, TM, D, 5, 8, SOL, "[Kr] 4d7 5s1"),
    (45, "Rh", "Rhodium", 102.91, TM, D, 5, 9, SOL, "[Kr] 4d8 5s1"),
    (46, "Pd", "Palladium", 106.42, TM, D, 5, 10, SOL, "[Kr] 4d10"),
    (47, "Ag", "Silver", 107.87, TM, D, 5, 11, SOL, "[Kr] 4d10 5s1"),
    (48, "Cd", "Cadmium", 112.41, TM, D, 5, 12, SOL, "[Kr] 4d10 5s2"),
    (49, "In", "Indium", 114.82, PTM, P, 5, 13, SOL, "[Kr] 4d10 5s2 5p1"),
    (50, "Sn", "Tin", 118.71, PTM, P, 5, 14, SOL, "[Kr] 4d10 5s2 5p2"),
    (51, "Sb", "Antimony", 121.76, MTL, P, 5, 15, SOL, "[Kr] 4d10 5s2 5p3"),
    (52, "Te", "Tellurium", 127.60, MTL, P, 5, 16, SOL, "[Kr] 4d10 5s2 5p4"),
    (53, "I", "Iodine", 126.90, HAL, P, 5, 17, SOL, "[Kr] 4d10 5s2 5p5"),
    (54, "Xe", "Xenon", 131.29, NG, P, 5, 18, GAS, "[Kr] 4d10 5s2 5p6"),
    (55, "Cs", "Caesium", 132.91, ALK, S, 6, 1, SOL, "[Xe] 6s1"),
    (56, "Ba", "Barium", 137.33, AE, S, 6, 2, SOL, "[Xe] 6s2"),
    (57, "La", "Lanthanum", 138.91, LAN, F, 6, 3, SOL, "[Xe] 5d1 6s2"),
    (58, "Ce", "Cerium", 140.12, LAN, F, 6, 3, SOL, "[Xe] 4f1 5d1 6s2"),
    (59, "Pr", "Praseodymium", 140.91, LAN, F, 6, 3, SOL, "[Xe] 4f3 6s2"),
    (60, "Nd", "Neodymium", 144.24, LAN, F, 6, 3, SOL, "[Xe] 4f4 6s2"),
    (61, "Pm", "Promethium", 145.0, LAN, F, 6, 3, SOL, "[Xe] 4f5 6s2"),
    (62, "Sm", "Samarium", 150.36, LAN, F, 6, 3, SOL, "[Xe] 4f6 6s2"),
    (63, "Eu", "Europium", 151.96, LAN, F, 6, 3, SOL, "[Xe] 4f7 6s2"),
    (64, "Gd", "Gadolinium", 157.25, LAN, F, 6, 3, SOL, "[Xe] 4f7 5d1 6s2"),
    (65, "Tb", "Terbium", 158.93, LAN, F, 6, 3, SOL, "[Xe] 4f9 6s2"),
    (66, "Dy", "Dysprosium", 162.50, LAN, F, 6, 3, SOL, "[Xe] 4f10 6s2"),
    (67, "Ho", "Holmium", 164.93, LAN, F, 6, 3, SOL, "[Xe] 4f11 6s2"),
    (68, "Er", "Erbium", 167.26, LAN, F, 6, 3, SOL, "[Xe] 4f12 6s2"),
    (69, "Tm", "Thulium", 168.93, LAN, F, 6, 3, SOL, "[Xe] 4f13 6s2"),
    (70, "Yb", "Ytterbium", 173.05, LAN, F, 6, 3, SOL, "[Xe] 4f14 6s2"),
    (71, "Lu", "Lutetium", 174.97, LAN, F, 6, 3, SOL, "[Xe] 4f14 5d1 6s2"),
    (72, "Hf", "Hafnium", 178.49, TM, D, 6, 4, SOL, "[Xe] 4f14 5d2 6s2"),
    (73, "Ta", "Tantalum", 180.95, TM, D, 6, 5, SOL, "[Xe] 4f14 5d3 6s2"),
    (74, "W", "Tungsten", 183.84, TM, D, 6, 6, SOL, "[Xe] 4f14 5d4 6s2"),
    (75, "Re", "Rhenium", 186.21, TM, D, 6, 7, SOL, "[Xe] 4f14 5d5 6s2"),
    (76, "Os", "Osmium", 190.23, TM, D, 6, 8, SOL, "[Xe] 4f14 5d6 6s2"),
    (77, "Ir", "Iridium", 192.22, TM, D, 6, 9, SOL, "[Xe] 4f14 5d7 6s2"),
    (78, "Pt", "Platinum", 195.08, TM, D, 6, 10, SOL, "[Xe] 4f14 5d9 6s1"),
    (79, "Au", "Gold", 196.97, TM, D, 6, 11, SOL, "[Xe] 4f14 5d10 6s1"),
    (80, "Hg", "Mercury", 200.59, TM, D, 6, 12, LIQ, "[Xe] 4f14 5d10 6s2"),
    (81, "Tl", "Thallium", 204.38, PTM, P, 6, 13, SOL, "[Xe] 4f14 5d10 6s2 6p1"),
    (82, "Pb", "Lead", 207.2, PTM, P, 6, 14, SOL, "[Xe] 4f14 5d10 6s2 6p2"),
    (83, "Bi", "Bismuth", 208.98, PTM, P, 6, 15, SOL, "[Xe] 4f14 5d10 6s2 6p3"),
    (84, "Po", "Polonium", 209.0, PTM, P, 6, 16, SOL, "[Xe] 4f14 5d10 6s2 6p4"),
    (85, "At", "Astatine", 210.0, HAL, P, 6, 17, SOL, "[Xe] 4f14 5d10 6s2 6p5"),
    (86, "Rn", "Radon", 222.0, NG, P, 6, 18, GAS, "[Xe] 4f14 5d10 6s2 6p6"),
    (87, "Fr", "Francium", 223.0, ALK, S, 7, 1, SOL, "[Rn] 7s1"),
    (88, "Ra", "Radium", 226.0, AE, S, 7, 2, SOL, "[Rn] 7s2"),
    (89, "Ac", "Actinium", 227.0, ACT, F, 7, 3, SOL, "[Rn] 6d1 7s2"),
    (90, "Th", "Thorium", 232.04, ACT, F, 7, 3, SOL, "[Rn] 6d2 7s2"),
    (91, "Pa", "Protactinium", 231.04, ACT, F, 7, 3, SOL, "[Rn] 5f2 6d1 7s2"),
    (92, "U", "Uranium", 238.03, ACT, F, 7, 3, SOL, "[Rn] 5f3 6d1 7s2"),
    (93, "Np", "Neptunium", 237.0, ACT, F, 7, 3, SOL, "[Rn] 5f4 6d1 7s2"),
    (94, "Pu", "Plutonium", 244.0, ACT, F, 7, 3, SOL, "[Rn] 5f6 7s2"),
    (95, "Am", "Americium", 243.0, ACT, F, 7, 3, SOL, "[Rn] 5f7 7s2"),
    (96, "Cm", "Curium", 247.0, ACT, F, 7, 3, SOL, "[Rn] 5f7 6d1 7s2"),
    (97, "Bk", "Berkelium", 247.0, ACT, F, 7, 3, SOL, "[Rn] 5f9 7s2"),
    (98, "Cf", "Californium", 251.0, ACT, F, 7, 3, SOL, "[Rn] 5f10 7s2"),
    (99, "Es", "Einsteinium", 252.0, ACT, F, 7, 3, SOL, "[Rn] 5f11 7s2"),
    (100, "Fm", "Fermium", 257.0, ACT, F, 7, 3, UNK, "[Rn] 5f12 7s2"),
    (101, "Md", "Mendelevium", 258.0, ACT, F, 7, 3, UNK, "[Rn] 5f13 7s2"),
    (102, "No", "Nobelium", 259.0, ACT, F, 7, 3, UNK, "[Rn] 5f14 7s2"),
    (103, "Lr", "Lawrencium", 266.0, ACT, F, 7, 3, UNK, "[Rn] 5f14 7s2 7p1"),
    (104, "Rf", "Rutherfordium", 267.0, TM, D, 7, 4, UNK, "[Rn] 5f14 6d2 7s2"),
    (105, "Db", "Dubnium", 268.0, TM, D, 7, 5, UNK, "[Rn] 5f14 6d3 7s2"),
    (106, "Sg", "Seaborgium", 269.0, TM, D, 7, 6, UNK, "[Rn] 5f14 6d4 7s2"),
    (107, "Bh", "Bohrium", 270.0, TM, D, 7, 7, UNK, "[Rn] 5f14 6d5 7s2"),
    (108, "Hs", "Hassium", 277.0, TM, D, 7, 8, UNK, "[Rn] 5f14 6d6 7s2"),
    (109, "Mt", "Meitnerium", 278.0, TM, D, 7, 9, UNK, "[Rn] 5f14 6d7 7s2"),
    (110, "Ds", "Darmstadtium", 281.0, TM, D, 7, 10, UNK, "[Rn] 5f14 6d8 7s2"),
    (111, "Rg", "Roentgenium", 282.0, TM, D, 7, 11, UNK, "[Rn] 5f14 6d9 7s2"),
    (112, "Cn", "Copernicium", 285.0, TM, D, 7, 12, UNK, "[Rn] 5f14 6d10 7s2"),
    (113, "Nh", "Nihonium", 286.0, PTM, P, 7, 13, UNK, "[Rn] 5f14 6d10 7s2 7p1"),
    (114, "Fl", "Flerovium", 289.0, PTM, P, 7, 14, UNK, "[Rn] 5f14 6d10 7s2 7p2"),
    (115, "Mc", "Moscovium", 290.0, PTM, P, 7, 15, UNK, "[Rn] 5f14 6d10 7s2 7p3"),
    (116, "Lv", "Livermorium", 293.0, PTM, P, 7, 16, UNK, "[Rn] 5f14 6d10 7s2 7p4"),
    (117, "Ts", "Tennessine", 294.0, HAL, P, 7, 17, UNK, "[Rn] 5f14 6d10 7s2 7p5"),
    (118, "Og", "Oganesson", 294.0, NG, P, 7, 18, UNK, "[Rn] 5f14 6d10 7s2 7p6"),
];

/// Extra reference notes for the elements students meet most often.
struct Notes {
    z: u8,
    /// Melting point, boiling point (K), density (g/cm³), Pauling electronegativity.
    constants: (Option<f64>, Option<f64>, Option<f64>, Option<f64>),
    uses: &'static [&'static str],
    facts: &'static [&'static str],
    discovery: Option<(&'static str, Option<i32>)>,
    importance: Option<&'static str>,
}

const NOTES: &[Notes] = &[
    Notes {
        z: 1,
        constants: (Some(13.99), Some(20.27), Some(0.0000899), Some(2.20)),
        uses: &["Ammonia synthesis", "Hydrogenation of vegetable oils", "Rocket fuel"],
        facts: &["Most abundant element in the universe", "Has three isotopes: protium, deuterium and tritium"],
        discovery: Some(("Henry Cavendish", Some(1766))),
        importance: Some("Position in the periodic table is debated; resembles both group 1 and group 17"),
    },
    Notes {
        z: 2,
        constants: (Some(0.95), Some(4.22), Some(0.0001786), None),
        uses: &["Balloons and airships", "Cryogenics for MRI magnets", "Breathing mixtures for deep-sea divers"],
        facts: &["Discovered in the solar spectrum before it was found on Earth"],
        discovery: Some(("Pierre Janssen and Norman Lockyer", Some(1868))),
        importance: Some("Lowest boiling point of any element"),
    },
    Notes {
        z: 3,
        constants: (Some(453.65), Some(1603.0), Some(0.534), Some(0.98)),
        uses: &["Rechargeable lithium-ion batteries", "Mood-stabilising drugs"],
        facts: &["Lightest metal; floats on oil"],
        discovery: Some(("Johan August Arfwedson", Some(1817))),
        importance: Some("Diagonal relationship with magnesium; anomalous behaviour in group 1"),
    },
    Notes {
        z: 6,
        constants: (None, Some(3915.0), Some(2.267), Some(2.55)),
        uses: &["Steel making", "Diamond cutting tools", "Graphite electrodes"],
        facts: &["Forms more compounds than any other element except hydrogen"],
        discovery: None,
        importance: Some("Catenation and allotropy; basis of organic chemistry"),
    },
    Notes {
        z: 7,
        constants: (Some(63.15), Some(77.36), Some(0.0012506), Some(3.04)),
        uses: &["Ammonia and fertiliser production", "Inert atmosphere for food packaging", "Liquid nitrogen coolant"],
        facts: &["Makes up about 78% of the atmosphere by volume"],
        discovery: Some(("Daniel Rutherford", Some(1772))),
        importance: Some("Triple bond in N2 explains its low reactivity"),
    },
    Notes {
        z: 8,
        constants: (Some(54.36), Some(90.20), Some(0.001429), Some(3.44)),
        uses: &["Respiration support in hospitals", "Steel making", "Oxy-acetylene welding"],
        facts: &["Most abundant element in the Earth's crust"],
        discovery: Some(("Carl Wilhelm Scheele and Joseph Priestley", Some(1774))),
        importance: Some("Paramagnetic nature explained by molecular orbital theory"),
    },
    Notes {
        z: 9,
        constants: (Some(53.48), Some(85.03), Some(0.001696), Some(3.98)),
        uses: &["Toothpaste additives", "Teflon manufacture", "Uranium enrichment as UF6"],
        facts: &["Most electronegative element"],
        discovery: Some(("Henri Moissan", Some(1886))),
        importance: Some("Anomalous low electron gain enthalpy compared to chlorine"),
    },
    Notes {
        z: 10,
        constants: (Some(24.56), Some(27.07), Some(0.0009002), None),
        uses: &["Advertising signs", "High-voltage indicators"],
        facts: &["Glows reddish orange in a discharge tube"],
        discovery: Some(("William Ramsay and Morris Travers", Some(1898))),
        importance: None,
    },
    Notes {
        z: 11,
        constants: (Some(370.94), Some(1156.09), Some(0.968), Some(0.93)),
        uses: &["Street lamps", "Coolant in nuclear reactors", "Table salt"],
        facts: &["Soft enough to cut with a knife", "Stored under kerosene"],
        discovery: Some(("Humphry Davy", Some(1807))),
        importance: Some("Castner-Kellner process; reaction with water"),
    },
    Notes {
        z: 12,
        constants: (Some(923.0), Some(1363.0), Some(1.738), Some(1.31)),
        uses: &["Lightweight alloys", "Flash photography", "Chlorophyll"],
        facts: &["Burns with a dazzling white flame"],
        discovery: Some(("Joseph Black", Some(1755))),
        importance: None,
    },
    Notes {
        z: 13,
        constants: (Some(933.47), Some(2792.0), Some(2.70), Some(1.61)),
        uses: &["Aircraft bodies", "Cooking foil", "Overhead power cables"],
        facts: &["Once more valuable than gold"],
        discovery: Some(("Hans Christian Oersted", Some(1825))),
        importance: Some("Hall-Heroult process; amphoteric oxide"),
    },
    Notes {
        z: 14,
        constants: (Some(1687.0), Some(3538.0), Some(2.329), Some(1.90)),
        uses: &["Semiconductor chips", "Solar cells", "Glass and cement"],
        facts: &["Second most abundant element in the Earth's crust"],
        discovery: Some(("Jons Jacob Berzelius", Some(1824))),
        importance: Some("Silicones and silicates"),
    },
    Notes {
        z: 15,
        constants: (Some(317.3), Some(553.7), Some(1.82), Some(2.19)),
        uses: &["Safety matches", "Phosphate fertiliser"],
        facts: &["White phosphorus glows in the dark"],
        discovery: Some(("Hennig Brand", Some(1669))),
        importance: Some("Allotropes of phosphorus; oxoacids"),
    },
    Notes {
        z: 16,
        constants: (Some(388.36), Some(717.8), Some(2.07), Some(2.58)),
        uses: &["Sulfuric acid production", "Vulcanisation of rubber"],
        facts: &["Known since ancient times as brimstone"],
        discovery: None,
        importance: Some("Contact process"),
    },
    Notes {
        z: 17,
        constants: (Some(171.6), Some(239.11), Some(0.003214), Some(3.16)),
        uses: &["Water purification", "Bleaching powder", "PVC manufacture"],
        facts: &["Used as a chemical weapon in the First World War"],
        discovery: Some(("Carl Wilhelm Scheele", Some(1774))),
        importance: Some("Highest electron gain enthalpy"),
    },
    Notes {
        z: 18,
        constants: (Some(83.81), Some(87.30), Some(0.001784), None),
        uses: &["Filling incandescent bulbs", "Shielding gas in arc welding"],
        facts: &["Third most abundant gas in the atmosphere"],
        discovery: Some(("Lord Rayleigh and William Ramsay", Some(1894))),
        importance: None,
    },
    Notes {
        z: 19,
        constants: (Some(336.7), Some(1032.0), Some(0.862), Some(0.82)),
        uses: &["Potash fertiliser", "Potassium permanganate"],
        facts: &["Reacts violently with water, igniting the released hydrogen"],
        discovery: Some(("Humphry Davy", Some(1807))),
        importance: None,
    },
    Notes {
        z: 20,
        constants: (Some(1115.0), Some(1757.0), Some(1.55), Some(1.00)),
        uses: &["Cement and plaster", "Bones and teeth"],
        facts: &["Fifth most abundant element in the Earth's crust"],
        discovery: Some(("Humphry Davy", Some(1808))),
        importance: Some("Plaster of Paris and quicklime preparation"),
    },
    Notes {
        z: 24,
        constants: (Some(2180.0), Some(2944.0), Some(7.19), Some(1.66)),
        uses: &["Stainless steel", "Chrome plating", "Potassium dichromate oxidant"],
        facts: &["Named after the Greek word for colour"],
        discovery: Some(("Louis Nicolas Vauquelin", Some(1797))),
        importance: Some("Exceptional 3d5 4s1 configuration"),
    },
    Notes {
        z: 25,
        constants: (Some(1519.0), Some(2334.0), Some(7.21), Some(1.55)),
        uses: &["Steel alloys", "Dry cell batteries"],
        facts: &["Shows the widest range of oxidation states in the 3d series"],
        discovery: Some(("Johan Gottlieb Gahn", Some(1774))),
        importance: Some("KMnO4 as an oxidising agent"),
    },
    Notes {
        z: 26,
        constants: (Some(1811.0), Some(3134.0), Some(7.874), Some(1.83)),
        uses: &["Steel and construction", "Catalyst in the Haber process", "Haemoglobin"],
        facts: &["Most used metal by mass"],
        discovery: None,
        importance: Some("Extraction in the blast furnace; variable oxidation states"),
    },
    Notes {
        z: 29,
        constants: (Some(1357.77), Some(2835.0), Some(8.96), Some(1.90)),
        uses: &["Electrical wiring", "Brass and bronze", "Coins"],
        facts: &["Turns green on exposure to moist air"],
        discovery: None,
        importance: Some("Exceptional 3d10 4s1 configuration; coloured Cu2+ compounds"),
    },
    Notes {
        z: 30,
        constants: (Some(692.68), Some(1180.0), Some(7.14), Some(1.65)),
        uses: &["Galvanising iron", "Dry cells"],
        facts: &["Not considered a typical transition element by some definitions"],
        discovery: None,
        importance: None,
    },
    Notes {
        z: 35,
        constants: (Some(265.8), Some(332.0), Some(3.1028), Some(2.96)),
        uses: &["Flame retardants", "Photographic film"],
        facts: &["Only non-metal that is liquid at room temperature"],
        discovery: Some(("Antoine Balard", Some(1826))),
        importance: None,
    },
    Notes {
        z: 47,
        constants: (Some(1234.93), Some(2435.0), Some(10.49), Some(1.93)),
        uses: &["Jewellery", "Photography", "Mirrors"],
        facts: &["Best electrical conductor of all metals"],
        discovery: None,
        importance: Some("Tollens' reagent"),
    },
    Notes {
        z: 53,
        constants: (Some(386.85), Some(457.4), Some(4.93), Some(2.66)),
        uses: &["Antiseptic tincture", "Iodised salt"],
        facts: &["Sublimes into a violet vapour"],
        discovery: Some(("Bernard Courtois", Some(1811))),
        importance: None,
    },
    Notes {
        z: 54,
        constants: (Some(161.4), Some(165.03), Some(0.005894), Some(2.60)),
        uses: &["Flash lamps", "Ion propulsion"],
        facts: &["First noble gas shown to form compounds"],
        discovery: Some(("William Ramsay and Morris Travers", Some(1898))),
        importance: Some("Xenon fluorides and their structures"),
    },
    Notes {
        z: 64,
        constants: (Some(1585.0), Some(3546.0), Some(7.90), Some(1.20)),
        uses: &["MRI contrast agents"],
        facts: &["Half-filled 4f7 shell gives it unusual magnetic behaviour"],
        discovery: Some(("Jean Charles Galissard de Marignac", Some(1880))),
        importance: Some("Lanthanoid contraction"),
    },
    Notes {
        z: 78,
        constants: (Some(2041.4), Some(4098.0), Some(21.45), Some(2.28)),
        uses: &["Catalytic converters", "Jewellery", "Anticancer drug cisplatin"],
        facts: &["Rarer than gold"],
        discovery: None,
        importance: None,
    },
    Notes {
        z: 79,
        constants: (Some(1337.33), Some(3129.0), Some(19.3), Some(2.54)),
        uses: &["Jewellery", "Electronics contacts", "Reserve currency"],
        facts: &["So malleable that one gram can be beaten into a square metre of leaf"],
        discovery: None,
        importance: None,
    },
    Notes {
        z: 80,
        constants: (Some(234.32), Some(629.88), Some(13.534), Some(2.00)),
        uses: &["Thermometers", "Amalgams"],
        facts: &["Only metal that is liquid at room temperature"],
        discovery: None,
        importance: None,
    },
    Notes {
        z: 82,
        constants: (Some(600.61), Some(2022.0), Some(11.34), Some(2.33)),
        uses: &["Lead-acid batteries", "Radiation shielding"],
        facts: &["Inert pair effect makes +2 more stable than +4"],
        discovery: None,
        importance: Some("Inert pair effect"),
    },
    Notes {
        z: 92,
        constants: (Some(1405.3), Some(4404.0), Some(19.1), Some(1.38)),
        uses: &["Nuclear reactor fuel"],
        facts: &["Heaviest element found in appreciable amounts in nature"],
        discovery: Some(("Martin Heinrich Klaproth", Some(1789))),
        importance: Some("Actinoid contraction"),
    },
    Notes {
        z: 118,
        constants: (None, None, None, None),
        uses: &[],
        facts: &["Only a handful of atoms have ever been made"],
        discovery: Some(("Joint Institute for Nuclear Research", Some(2002))),
        importance: None,
    },
];

/// Syllabus levels follow the CBSE split: everything up to Kr appears in
/// class 11 periodicity, while d/f-block and groups 15-18 chemistry is class
/// 12. JEE draws on the table up to Rn, NEET up to Xe plus the f-block.
fn levels_for(z: u8, block: Block, group: u8) -> Vec<Level> {
    let mut levels = Vec::new();
    if z <= 36 {
        levels.push(Level::Class11);
    }
    if matches!(block, D | F) && z <= 103 || block == P && group >= 15 && z <= 86 {
        levels.push(Level::Class12);
    }
    if z <= 86 {
        levels.push(Level::Jee);
    }
    if z <= 54 || block == F && z <= 103 {
        levels.push(Level::Neet);
    }
    levels
}

pub(crate) fn build() -> Vec<Element> {
    TABLE
        .iter()
        .map(|&(z, symbol, name, mass, category, block, period, group, state, config)| {
            let notes = NOTES.iter().find(|n| n.z == z);
            let (melting_point, boiling_point, density, electronegativity) =
                notes.map(|n| n.constants).unwrap_or((None, None, None, None));
            Element {
                atomic_number: z,
                symbol: symbol.to_string(),
                name: name.to_string(),
                atomic_mass: mass,
                category,
                block,
                period,
                group,
                state,
                electron_configuration: config.to_string(),
                melting_point,
                boiling_point,
                density,
                electronegativity,
                uses: notes.map(|n| strings(n.uses)).unwrap_or_default(),
                fun_facts: notes.map(|n| strings(n.facts)).unwrap_or_default(),
                discovery: notes.and_then(|n| n.discovery).map(|(by, year)| Discovery {
                    by: by.to_string(),
                    year,
                }),
                levels: levels_for(z, block, group),
                importance: notes.and_then(|n| n.importance).map(str::to_string),
            }
        })
        .collect()
}
