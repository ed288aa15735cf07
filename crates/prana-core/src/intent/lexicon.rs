//! Static dictionaries for the intent parser. Entries are written in normalized form
//! (lowercase, no diacritics). Portuguese first, common English equivalents after.

use super::{EmotionRule, QuestionType, Subject, Theme, VerbClass};

/// Subject markers, scanned in precedence order (relational > other > self).
pub const SUBJECT_MARKERS: &[(Subject, &[&str])] = &[
    (
        Subject::Relational,
        &[
            "meu namorado", "minha namorada", "meu marido", "minha esposa", "minha mulher",
            "meu parceiro", "minha parceira", "meu ex", "minha ex", "nosso relacionamento",
            "nossa relacao", "a gente", "nos dois", "my partner", "my boyfriend",
            "my girlfriend", "my husband", "my wife", "our relationship", "my ex", "we",
        ],
    ),
    (
        Subject::Other,
        &[
            "ele", "ela", "eles", "elas", "meu pai", "minha mae", "meu chefe", "minha chefe",
            "meu filho", "minha filha", "meu amigo", "minha amiga", "meu irmao", "minha irma",
            "alguem", "as pessoas", "he", "she", "they", "my boss", "my mother", "my father",
            "my friend", "my son", "my daughter", "people",
        ],
    ),
    (
        Subject::SelfRef,
        &["eu", "me", "mim", "comigo", "meu", "minha", "i", "im", "myself", "my"],
    ),
];

/// Verb-class phrases. First class with a matching phrase wins, in this order.
pub const VERB_PHRASES: &[(VerbClass, &[&str])] = &[
    (
        VerbClass::Fear,
        &[
            "tenho medo", "estou com medo", "medo de", "receio", "temo", "tenho pavor",
            "i fear", "im afraid", "i am afraid", "scared of", "afraid of", "fear of",
            "worried about",
        ],
    ),
    (
        VerbClass::Conflict,
        &[
            "briguei", "brigamos", "brigando", "discuti", "discutimos", "discutindo",
            "conflito com", "nao me entendo com", "fight", "fighting", "fought", "argue",
            "argued", "arguing", "conflict with",
        ],
    ),
    (
        VerbClass::Feel,
        &[
            "me sinto", "sinto", "sentindo", "estou", "ando", "i feel", "feeling", "i am", "im",
        ],
    ),
    (
        VerbClass::Seek,
        &[
            "quero", "preciso", "busco", "procuro", "gostaria", "como faco", "i want", "i need",
            "looking for", "seeking", "how do i",
        ],
    ),
    (
        VerbClass::Reflect,
        &[
            "penso", "pensando", "refletindo", "me pergunto", "questiono", "i wonder",
            "thinking about", "reflecting",
        ],
    ),
];

/// Theme keywords. The longest matching keyword decides the theme.
pub const THEME_KEYWORDS: &[(Theme, &[&str])] = &[
    (
        Theme::Love,
        &[
            "amor", "relacionamento", "namoro", "namorado", "namorada", "casamento", "marido",
            "esposa", "paixao", "crush", "ex", "love", "relationship", "partner", "dating",
            "marriage", "boyfriend", "girlfriend",
        ],
    ),
    (
        Theme::Career,
        &[
            "trabalho", "emprego", "carreira", "chefe", "profissao", "negocio", "empresa",
            "dinheiro", "salario", "promocao", "demissao", "job", "work", "career", "boss",
            "business", "money", "promotion",
        ],
    ),
    (
        Theme::Year,
        &[
            "este ano", "esse ano", "ano novo", "proximo ano", "ano que vem", "this year",
            "next year", "new year", "coming year",
        ],
    ),
    (
        Theme::Health,
        &[
            "saude", "doenca", "corpo", "dor", "sono", "insonia", "dormir", "alimentacao",
            "health", "body", "sleep", "insomnia", "pain", "illness", "disease",
        ],
    ),
    (
        Theme::Spirituality,
        &[
            "espiritual", "espiritualidade", "meditacao", "meditar", "proposito", "alma",
            "deus", "fe", "dharma", "karma", "spiritual", "spirituality", "meditation",
            "soul", "purpose", "god", "faith",
        ],
    ),
];

/// Question-type phrases, scanned in this order.
pub const QUESTION_PHRASES: &[(QuestionType, &[&str])] = &[
    (QuestionType::Why, &["por que", "porque", "por qual motivo", "why"]),
    (QuestionType::How, &["como", "de que forma", "how"]),
    (QuestionType::When, &["quando", "when"]),
    (QuestionType::Where, &["onde", "aonde", "where"]),
    (QuestionType::Who, &["quem", "who"]),
    (QuestionType::What, &["o que", "qual", "quais", "what", "which"]),
];

/// Emotion dictionary. Keywords match at word starts, so stems cover inflections.
/// Some state keys (`panic`, `nostalgia`, `abandonment`) have no remedy entry and are
/// dropped by the scorer.
pub const EMOTION_RULES: &[EmotionRule] = &[
    EmotionRule::Flat {
        label: "anxiety",
        keywords: &["ansios", "ansiedade", "nervos", "preocupad", "aflit", "anxious", "anxiety", "nervous", "worried"],
        state: "anxiety",
    },
    EmotionRule::Multi {
        label: "fear",
        keywords: &["medo", "pavor", "receio", "fear", "afraid", "scared"],
        state_keys: &["fear_of_loss", "anxiety", "panic"],
    },
    EmotionRule::Flat {
        label: "fear_of_loss",
        keywords: &["medo de perder", "perder tudo", "fear of losing", "lose everything"],
        state: "fear_of_loss",
    },
    EmotionRule::Flat {
        label: "panic",
        keywords: &["panico", "ataque de", "panic"],
        state: "panic",
    },
    EmotionRule::Flat {
        label: "anger",
        keywords: &["raiva", "irritad", "odio", "furios", "angry", "anger", "rage", "mad at"],
        state: "anger",
    },
    EmotionRule::Flat {
        label: "resentment",
        keywords: &["magoa", "magoad", "ressentiment", "rancor", "resent", "hurt by"],
        state: "resentment",
    },
    EmotionRule::Flat {
        label: "jealousy",
        keywords: &["ciume", "jealous"],
        state: "jealousy",
    },
    EmotionRule::Flat {
        label: "guilt",
        keywords: &["culpa", "remorso", "guilt", "remorse"],
        state: "guilt",
    },
    EmotionRule::Flat {
        label: "shame",
        keywords: &["vergonha", "envergonhad", "humilhad", "shame", "ashamed", "embarrass"],
        state: "shame",
    },
    EmotionRule::Flat {
        label: "sadness",
        keywords: &["triste", "deprimid", "chorand", "chorei", "sad", "depress", "feeling down"],
        state: "sadness",
    },
    EmotionRule::Multi {
        label: "grief",
        keywords: &[
            "luto", "saudade", "falec", "morreu", "perdi alguem", "perdi minha", "perdi meu",
            "grief", "mourning", "passed away", "lost my",
        ],
        state_keys: &["grief", "nostalgia", "sadness"],
    },
    EmotionRule::Flat {
        label: "loneliness",
        keywords: &["sozinh", "solidao", "isolad", "lonely", "alone", "isolated"],
        state: "loneliness",
    },
    EmotionRule::Flat {
        label: "apathy",
        keywords: &["desanimad", "desmotivad", "apatia", "sem vontade", "indiferen", "apath", "unmotivated"],
        state: "apathy",
    },
    EmotionRule::Flat {
        label: "procrastination",
        keywords: &["procrastin", "adiando", "enrolando", "put off", "putting off"],
        state: "procrastination",
    },
    EmotionRule::Multi {
        label: "confusion",
        keywords: &["confus", "perdid", "sem rumo", "nao sei o que fazer", "lost", "don't know what to do"],
        state_keys: &["confusion", "indecision"],
    },
    EmotionRule::Flat {
        label: "overthinking",
        keywords: &["pensando demais", "nao paro de pensar", "mente acelerada", "cabeca a mil", "overthink", "racing thoughts"],
        state: "overthinking",
    },
    EmotionRule::Flat {
        label: "insecurity",
        keywords: &["insegur", "insecur"],
        state: "insecurity",
    },
    EmotionRule::Flat {
        label: "pride",
        keywords: &["orgulh", "arrogan", "superior", "pride", "proud"],
        state: "pride",
    },
    EmotionRule::Flat {
        label: "perfectionism",
        keywords: &["perfeccion", "tudo perfeito", "perfectionis"],
        state: "perfectionism",
    },
    EmotionRule::Flat {
        label: "impatience",
        keywords: &["impacien", "pressa", "impatien", "hurry"],
        state: "impatience",
    },
    EmotionRule::Flat {
        label: "restlessness",
        keywords: &["inquiet", "agitad", "restless", "agitat"],
        state: "restlessness",
    },
    EmotionRule::Flat {
        label: "attachment",
        keywords: &["apeg", "nao consigo largar", "dependen", "attached", "let go"],
        state: "attachment",
    },
    EmotionRule::Multi {
        label: "craving",
        keywords: &["vontade de", "desejo", "compuls", "vicio", "fissura", "craving", "addict"],
        state_keys: &["craving", "attachment"],
    },
    EmotionRule::Flat {
        label: "envy",
        keywords: &["inveja", "invejos", "envy", "envious"],
        state: "envy",
    },
    EmotionRule::Flat {
        label: "self_doubt",
        keywords: &["duvido de mim", "nao sou capaz", "nao sou bom", "nao sou boa", "incapaz", "self doubt", "not good enough", "doubt myself"],
        state: "self_doubt",
    },
    EmotionRule::Multi {
        label: "burnout",
        keywords: &["esgotad", "exaust", "sobrecarreg", "burnout", "burned out", "overwhelm", "exhausted"],
        state_keys: &["burnout", "fatigue"],
    },
    EmotionRule::Flat {
        label: "fatigue",
        keywords: &["cansad", "cansaco", "sem energia", "tired", "fatigue"],
        state: "fatigue",
    },
    EmotionRule::Flat {
        label: "indecision",
        keywords: &["indecis", "nao consigo decidir", "duvida entre", "undecided", "can't decide"],
        state: "indecision",
    },
    EmotionRule::Flat {
        label: "hopelessness",
        keywords: &["sem esperanca", "desesper", "nada vai dar certo", "hopeless", "despair"],
        state: "hopelessness",
    },
    EmotionRule::Flat {
        label: "control",
        keywords: &["control", "tudo sob", "micromanag"],
        state: "control",
    },
    EmotionRule::Multi {
        label: "rejection",
        keywords: &["rejeic", "rejeitad", "abandon", "rejected", "rejection"],
        state_keys: &["rejection_fear", "loneliness", "abandonment"],
    },
    EmotionRule::Flat {
        label: "frustration",
        keywords: &["frustra", "travad", "stuck"],
        state: "frustration",
    },
];

/// Literal compound phrases that add +1 to a state's score.
pub const COMPOUND_BONUSES: &[(&str, &str)] = &[
    ("medo de perder", "fear_of_loss"),
    ("fear of losing", "fear_of_loss"),
    ("medo de ficar sozinho", "loneliness"),
    ("medo de ficar sozinha", "loneliness"),
    ("nao paro de pensar", "overthinking"),
    ("medo de ser rejeitad", "rejection_fear"),
];
