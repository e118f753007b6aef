use crate::catalog::{ContentSection, ExamType, LearningPath, Topic};

struct TopicSpec {
    id: &'static str,
    title: &'static str,
    minutes: u32,
    prerequisites: &'static [&'static str],
    sections: &'static [(&'static str, &'static str)],
}

struct PathSpec {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    exam: ExamType,
    topics: &'static [TopicSpec],
}

const PATHS: &[PathSpec] = &[
    PathSpec {
        id: "foundations",
        title: "Chemistry Foundations",
        description: "Atomic structure through chemical bonding, the backbone of class 11.",
        exam: ExamType::Cbse,
        topics: &[
            TopicSpec {
                id: "atomic-structure",
                title: "Structure of Atom",
                minutes: 90,
                prerequisites: &[],
                sections: &[
                    ("Quantum numbers", "n, l, m and s describe each electron in an atom."),
                    ("Aufbau principle", "Orbitals fill in order of increasing n + l."),
                ],
            },
            TopicSpec {
                id: "periodicity",
                title: "Periodic Classification",
                minutes: 75,
                prerequisites: &["atomic-structure"],
                sections: &[
                    ("Modern periodic law", "Properties are periodic functions of atomic number."),
                    ("Trends", "Radius, ionisation enthalpy and electronegativity across periods and down groups."),
                ],
            },
            TopicSpec {
                id: "bonding",
                title: "Chemical Bonding",
                minutes: 120,
                prerequisites: &["atomic-structure", "periodicity"],
                sections: &[
                    ("VSEPR", "Electron pair repulsion predicts molecular shape."),
                    ("MO theory", "Bond order and magnetism from molecular orbital diagrams."),
                ],
            },
        ],
    },
    PathSpec {
        id: "jee-physical",
        title: "JEE Physical Chemistry",
        description: "Equilibrium, kinetics and electrochemistry with numerical practice.",
        exam: ExamType::Jee,
        topics: &[
            TopicSpec {
                id: "thermodynamics",
                title: "Thermodynamics",
                minutes: 100,
                prerequisites: &[],
                sections: &[("Hess's law", "Enthalpy change is independent of path.")],
            },
            TopicSpec {
                id: "equilibrium",
                title: "Equilibrium",
                minutes: 110,
                prerequisites: &["thermodynamics"],
                sections: &[
                    ("Le Chatelier's principle", "A system at equilibrium shifts to oppose an imposed change."),
                    ("Ionic equilibrium", "pH, buffers and solubility product."),
                ],
            },
            TopicSpec {
                id: "kinetics",
                title: "Chemical Kinetics",
                minutes: 90,
                prerequisites: &[],
                sections: &[("Integrated rate laws", "Zero and first-order concentration-time relationships.")],
            },
            TopicSpec {
                id: "electrochemistry",
                title: "Electrochemistry",
                minutes: 100,
                prerequisites: &["equilibrium", "kinetics"],
                sections: &[("Nernst equation", "Cell potential depends on ion concentrations.")],
            },
        ],
    },
];

pub(super) fn build() -> Vec<LearningPath> {
    PATHS
        .iter()
        .map(|p| LearningPath {
            id: p.id.to_string(),
            title: p.title.to_string(),
            description: p.description.to_string(),
            exam: p.exam,
            topics: p
                .topics
                .iter()
                .map(|t| Topic {
                    id: t.id.to_string(),
                    title: t.title.to_string(),
                    sections: t
                        .sections
                        .iter()
                        .map(|(heading, body)| ContentSection {
                            heading: heading.to_string(),
                            body: body.to_string(),
                        })
                        .collect(),
                    prerequisites: super::strings(t.prerequisites),
                    minutes: t.minutes,
                })
                .collect(),
        })
        .collect()
}
