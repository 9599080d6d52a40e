macro_rules! dependency_relations {
    ($($variant:ident => $label:literal,)*) => {
        /// Dependency labels of the ClearNLP scheme used by English spaCy
        /// models. Labels outside the scheme are kept verbatim.
        #[derive(Clone, Debug, Hash, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum DependencyRelation {
            $($variant,)*
            Other(String),
        }

        impl DependencyRelation {
            pub fn as_str(&self) -> &str {
                match self {
                    $(DependencyRelation::$variant => $label,)*
                    DependencyRelation::Other(label) => label,
                }
            }

            pub fn from_label(label: &str) -> DependencyRelation {
                match label {
                    $($label => DependencyRelation::$variant,)*
                    other => DependencyRelation::Other(other.to_string()),
                }
            }
        }
    };
}

dependency_relations! {
    Acl => "acl",
    Acomp => "acomp",
    Advcl => "advcl",
    Advmod => "advmod",
    Agent => "agent",
    Amod => "amod",
    Appos => "appos",
    Attr => "attr",
    Aux => "aux",
    Auxpass => "auxpass",
    Case => "case",
    Cc => "cc",
    Ccomp => "ccomp",
    Compound => "compound",
    Conj => "conj",
    Csubj => "csubj",
    Csubjpass => "csubjpass",
    Dative => "dative",
    Dep => "dep",
    Det => "det",
    Dobj => "dobj",
    Expl => "expl",
    Intj => "intj",
    Mark => "mark",
    Meta => "meta",
    Neg => "neg",
    Nmod => "nmod",
    Npadvmod => "npadvmod",
    Nsubj => "nsubj",
    Nsubjpass => "nsubjpass",
    Nummod => "nummod",
    Oprd => "oprd",
    Parataxis => "parataxis",
    Pcomp => "pcomp",
    Pobj => "pobj",
    Poss => "poss",
    Preconj => "preconj",
    Predet => "predet",
    Prep => "prep",
    Prt => "prt",
    Punct => "punct",
    Quantmod => "quantmod",
    Relcl => "relcl",
    Root => "ROOT",
    Xcomp => "xcomp",
}

impl From<String> for DependencyRelation {
    fn from(label: String) -> Self {
        DependencyRelation::from_label(&label)
    }
}

impl From<DependencyRelation> for String {
    fn from(relation: DependencyRelation) -> Self {
        relation.as_str().to_string()
    }
}

impl std::fmt::Display for DependencyRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
