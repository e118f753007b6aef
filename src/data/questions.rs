use super::strings;
use crate::catalog::{Difficulty, ExamType, Question};

use Difficulty::{Easy, Hard, Medium};
use ExamType::{Cbse, Jee, Neet};

// id, prompt, options, correct, explanation, difficulty, topic, chapter, exam, seconds, marks
type Row = (
    &'static str,
    &'static str,
    [&'static str; 4],
    usize,
    &'static str,
    Difficulty,
    &'static str,
    &'static str,
    ExamType,
    u32,
    u32,
);

const ROWS: &[Row] = &[
    (
        "q-periodic-1",
        "Which element has the highest electronegativity?",
        ["Oxygen", "Chlorine", "Fluorine", "Nitrogen"],
        2,
        "Fluorine has a Pauling electronegativity of 3.98, the highest of all elements.",
        Easy,
        "Periodic trends",
        "Classification of Elements and Periodicity in Properties",
        Cbse,
        60,
        1,
    ),
    (
        "q-periodic-2",
        "Which of the following has the largest atomic radius?",
        ["Na", "Mg", "K", "Ca"],
        2,
        "Radius increases down a group and decreases across a period, so K is largest.",
        Easy,
        "Periodic trends",
        "Classification of Elements and Periodicity in Properties",
        Neet,
        60,
        4,
    ),
    (
        "q-periodic-3",
        "The element with configuration [Ar] 3d5 4s1 is",
        ["Manganese", "Chromium", "Iron", "Vanadium"],
        1,
        "Chromium adopts a half-filled 3d5 4s1 configuration for extra exchange stability.",
        Medium,
        "Electronic configuration",
        "Structure of Atom",
        Jee,
        90,
        4,
    ),
    (
        "q-bonding-1",
        "The shape of the XeF4 molecule is",
        ["Tetrahedral", "Square planar", "See-saw", "Octahedral"],
        1,
        "Xe has four bond pairs and two lone pairs; the lone pairs sit trans, giving square planar geometry.",
        Medium,
        "VSEPR theory",
        "Chemical Bonding and Molecular Structure",
        Jee,
        90,
        4,
    ),
    (
        "q-bonding-2",
        "Which molecule is paramagnetic according to molecular orbital theory?",
        ["N2", "O2", "F2", "C2"],
        1,
        "O2 has two unpaired electrons in its antibonding pi orbitals.",
        Medium,
        "Molecular orbital theory",
        "Chemical Bonding and Molecular Structure",
        Neet,
        90,
        4,
    ),
    (
        "q-equilibrium-1",
        "For N2 + 3H2 ⇌ 2NH3, increasing pressure will",
        ["Shift equilibrium left", "Shift equilibrium right", "Have no effect", "Change Kp"],
        1,
        "The forward reaction reduces the number of gas moles, so higher pressure favours ammonia.",
        Easy,
        "Le Chatelier's principle",
        "Equilibrium",
        Cbse,
        60,
        1,
    ),
    (
        "q-kinetics-1",
        "The half-life of a first-order reaction is",
        ["Proportional to initial concentration", "Inversely proportional to initial concentration", "Independent of initial concentration", "Proportional to the square of initial concentration"],
        2,
        "For first-order kinetics t½ = 0.693/k, which has no concentration term.",
        Easy,
        "Rate laws",
        "Chemical Kinetics",
        Neet,
        60,
        4,
    ),
    (
        "q-kinetics-2",
        "A first-order reaction is 75% complete in 60 minutes. Its half-life is",
        ["15 min", "30 min", "45 min", "60 min"],
        1,
        "75% completion takes two half-lives, so t½ = 30 minutes.",
        Medium,
        "Rate laws",
        "Chemical Kinetics",
        Jee,
        120,
        4,
    ),
    (
        "q-electro-1",
        "In the electrolysis of acidified water, oxygen is liberated at the",
        ["Cathode", "Anode", "Both electrodes", "Neither electrode"],
        1,
        "Oxidation of water occurs at the anode, releasing O2.",
        Easy,
        "Electrolysis",
        "Electrochemistry",
        Cbse,
        60,
        1,
    ),
    (
        "q-organic-1",
        "Which compound undergoes the Cannizzaro reaction?",
        ["Acetaldehyde", "Acetone", "Benzaldehyde", "Propanal"],
        2,
        "Benzaldehyde has no alpha hydrogen, so it disproportionates in concentrated alkali.",
        Medium,
        "Named reactions",
        "Aldehydes, Ketones and Carboxylic Acids",
        Neet,
        90,
        4,
    ),
    (
        "q-organic-2",
        "Addition of HBr to propene in the presence of peroxide gives",
        ["2-Bromopropane", "1-Bromopropane", "1,2-Dibromopropane", "Propan-2-ol"],
        1,
        "Peroxides switch the mechanism to free radical addition, giving the anti-Markovnikov product.",
        Hard,
        "Addition reactions",
        "Hydrocarbons",
        Jee,
        120,
        4,
    ),
    (
        "q-dblock-1",
        "The lanthanoid contraction is responsible for the similar radii of",
        ["Zr and Hf", "Sc and Y", "Cu and Ag", "Fe and Ru"],
        0,
        "Poor shielding by 4f electrons makes Hf almost the same size as Zr.",
        Hard,
        "Lanthanoid contraction",
        "The d- and f-Block Elements",
        Jee,
        120,
        4,
    ),
];

pub(super) fn build() -> Vec<Question> {
    ROWS.iter()
        .map(
            |&(id, prompt, options, correct, explanation, difficulty, topic, chapter, exam, time_limit, marks)| Question {
                id: id.to_string(),
                prompt: prompt.to_string(),
                options: strings(&options),
                correct,
                explanation: explanation.to_string(),
                difficulty,
                topic: topic.to_string(),
                chapter: chapter.to_string(),
                exam,
                time_limit,
                marks,
            },
        )
        .collect()
}
