//! Remedy matrix: one row per emotional state.

use super::{Corpus, RemedyEntry, TextRef};
use crate::shared::{Guna, Klesha, Quality};

const fn text(corpus: Corpus, id: &'static str) -> TextRef {
    TextRef {
        corpus,
        id,
        verse: None,
    }
}

const fn text_with_verse(corpus: Corpus, id: &'static str, verse: &'static str) -> TextRef {
    TextRef {
        corpus,
        id,
        verse: Some(verse),
    }
}

use Corpus::{Dhammapada, Gita, YogaSutra};
use Quality::*;

pub static REMEDY_MATRIX: &[RemedyEntry] = &[
    RemedyEntry {
        state: "anxiety",
        klesha: Klesha::Abhinivesha,
        guna: Guna::Rajas,
        qualities: &[Mobile, Light, Cold, Dry],
        text_ref: text_with_verse(
            YogaSutra,
            "1.34",
            "The mind settles through the soft outflow and the quiet holding of the breath.",
        ),
        practice: "Sit with your back supported. Breathe in for four counts and out for six. Repeat for ten rounds with the hands resting on the belly.",
        food: "warm oat porridge with ghee; cooked root vegetables; chamomile or warm milk with nutmeg",
        question: "What is actually happening right now, in this room, apart from what you imagine might happen?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "fear_of_loss",
        klesha: Klesha::Abhinivesha,
        guna: Guna::Rajas,
        qualities: &[Mobile, Cold, Light],
        text_ref: text(Dhammapada, "212"),
        practice: "Name three things you fear losing. For each one, say aloud what it has already given you. Close with five slow breaths into the chest.",
        food: "warm soups with ginger; sweet potato; dates soaked in warm water",
        question: "If this were to change, what in you would still remain?",
        minutes: Some(12),
    },
    RemedyEntry {
        state: "anger",
        klesha: Klesha::Dvesha,
        guna: Guna::Rajas,
        qualities: &[Hot, Sharp, Mobile],
        text_ref: text(Dhammapada, "222"),
        practice: "Before answering anyone, pause and breathe out through the mouth three times. Walk slowly for ten minutes in open air. Cool the face and wrists with water.",
        food: "cucumber and mint; coconut water; sweet ripe fruit",
        question: "What need of yours is this anger trying to protect?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "resentment",
        klesha: Klesha::Dvesha,
        guna: Guna::Tamas,
        qualities: &[Heavy, Hot, Hard],
        text_ref: text(Dhammapada, "3"),
        practice: "Write the story of the hurt in one page. Read it once, then write one line about what you want now. Tear up the page.",
        food: "bitter greens; warm lemon water; light lentil broth",
        question: "What would you gain if you stopped waiting for them to change?",
        minutes: Some(15),
    },
    RemedyEntry {
        state: "jealousy",
        klesha: Klesha::Raga,
        guna: Guna::Rajas,
        qualities: &[Hot, Sharp, Mobile],
        text_ref: text(Gita, "4.22"),
        practice: "Notice where jealousy sits in the body. Place a hand there and breathe into it for two minutes. List three things you already have that you value.",
        food: "rice with cooling herbs; pear or melon; fennel tea",
        question: "Which fear hides behind the wish to hold on to this person?",
        minutes: Some(8),
    },
    RemedyEntry {
        state: "guilt",
        klesha: Klesha::Asmita,
        guna: Guna::Tamas,
        qualities: &[Heavy, Cold, Dense],
        text_ref: text(Gita, "4.36"),
        practice: "Write down what you did and what you would do differently. Choose one concrete act of repair. Do it today, however small.",
        food: "warm spiced milk; cooked apples with cinnamon; light vegetable soup",
        question: "What would repair look like, beyond punishing yourself?",
        minutes: Some(15),
    },
    RemedyEntry {
        state: "shame",
        klesha: Klesha::Asmita,
        guna: Guna::Tamas,
        qualities: &[Heavy, Cold, Slow],
        text_ref: text(Gita, "6.5"),
        practice: "Stand tall with feet rooted and chest open for one minute. Say one kind sentence to yourself as you would to a friend. Repeat it morning and night.",
        food: "warm grains with ghee; ginger tea; cooked greens with cumin",
        question: "Whose voice is speaking when you feel this shame?",
        minutes: Some(5),
    },
    RemedyEntry {
        state: "sadness",
        klesha: Klesha::Raga,
        guna: Guna::Tamas,
        qualities: &[Heavy, Cold, Slow],
        text_ref: text(Gita, "2.14"),
        practice: "Let yourself feel the sadness for five minutes without fixing it. Then go outside and walk in daylight. Call or write to one person you trust.",
        food: "warm spiced soups; cooked fruit with cardamom; tulsi or ginger tea",
        question: "What is this sadness asking you to honor?",
        minutes: Some(20),
    },
    RemedyEntry {
        state: "grief",
        klesha: Klesha::Abhinivesha,
        guna: Guna::Tamas,
        qualities: &[Heavy, Cold, Dry],
        text_ref: text(Gita, "2.27"),
        practice: "Light a candle and sit with a memory of what was lost. Speak one sentence of thanks to it. Rest with long slow exhales for five minutes.",
        food: "warm rice and mung dal; stewed pears; warm milk with saffron",
        question: "What part of what you lost do you want to carry forward?",
        minutes: Some(15),
    },
    RemedyEntry {
        state: "loneliness",
        klesha: Klesha::Raga,
        guna: Guna::Tamas,
        qualities: &[Cold, Dry, Light],
        text_ref: text(Dhammapada, "368"),
        practice: "Sit quietly and send a wish of well-being to yourself, then to someone close, then to a stranger. Reach out to one person today with a simple message.",
        food: "warm nourishing stews; sweet potatoes; warm almond milk",
        question: "What kind of connection are you truly missing?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "apathy",
        klesha: Klesha::Avidya,
        guna: Guna::Tamas,
        qualities: &[Heavy, Slow, Cloudy],
        text_ref: text(Dhammapada, "280"),
        practice: "Get up and move briskly for five minutes. Open a window and take ten strong breaths. Choose one small task and finish it before noon.",
        food: "ginger and black pepper tea; light warm meals; avoid heavy sweets",
        question: "When did you last feel something matter, and what was different then?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "procrastination",
        klesha: Klesha::Avidya,
        guna: Guna::Tamas,
        qualities: &[Heavy, Slow, Dense],
        text_ref: text(Gita, "3.8"),
        practice: "Set a timer for fifteen minutes. Work only on the first step of the task. When the timer rings, decide freely whether to continue.",
        food: "light breakfast; warm water with lemon and ginger; roasted seeds",
        question: "What are you protecting yourself from by not starting?",
        minutes: Some(15),
    },
    RemedyEntry {
        state: "confusion",
        klesha: Klesha::Avidya,
        guna: Guna::Tamas,
        qualities: &[Cloudy, Heavy, Slow],
        text_ref: text(Gita, "4.42"),
        practice: "Write every open question on paper. Circle the one that matters most this week. Sit in silence for five minutes with only that question.",
        food: "light warm meals; fresh herbs such as basil and mint; avoid heavy fried food",
        question: "What do you already know, beneath the confusion?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "overthinking",
        klesha: Klesha::Avidya,
        guna: Guna::Rajas,
        qualities: &[Mobile, Light, Subtle],
        text_ref: text(Gita, "6.26"),
        practice: "Count ten breaths, starting over whenever a thought pulls you away. Then write the loudest thought down and set the page aside. Feel your feet on the floor.",
        food: "warm grounding meals; cooked root vegetables; warm milk with nutmeg at night",
        question: "Which of these thoughts can you act on today, and which can you let rest?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "insecurity",
        klesha: Klesha::Asmita,
        guna: Guna::Rajas,
        qualities: &[Mobile, Light, Cold],
        text_ref: text(Dhammapada, "81"),
        practice: "Stand barefoot and feel your weight settle into the ground. Recall one moment when you handled something hard. Hold that memory for three slow breaths.",
        food: "warm whole grains; nuts and seeds; sesame oil in cooking",
        question: "Whose approval are you waiting for, and what would change if you had it?",
        minutes: Some(8),
    },
    RemedyEntry {
        state: "pride",
        klesha: Klesha::Asmita,
        guna: Guna::Rajas,
        qualities: &[Hot, Sharp, Hard],
        text_ref: text(Gita, "3.27"),
        practice: "Ask one person for honest feedback and listen without replying. Do one anonymous kindness today. Bow your head briefly before meals.",
        food: "simple cooling foods; leafy greens; sweet fruits",
        question: "What would you lose if you were not right this time?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "perfectionism",
        klesha: Klesha::Asmita,
        guna: Guna::Rajas,
        qualities: &[Sharp, Hot, Hard],
        text_ref: text(Gita, "18.48"),
        practice: "Pick one task and decide in advance what good enough looks like. Stop when you reach it. Notice what happens in the body when you let it go.",
        food: "cooling grains like rice and barley; coconut; mild spices",
        question: "Who taught you that anything less than perfect is not enough?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "impatience",
        klesha: Klesha::Raga,
        guna: Guna::Rajas,
        qualities: &[Sharp, Mobile, Hot],
        text_ref: text(YogaSutra, "1.14"),
        practice: "Do one ordinary task at half your usual speed. Eat one meal without screens, chewing slowly. Breathe out longer than you breathe in.",
        food: "sweet juicy fruits; rice pudding with cardamom; rose or fennel tea",
        question: "What are you hurrying toward, and what are you missing on the way?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "restlessness",
        klesha: Klesha::Raga,
        guna: Guna::Rajas,
        qualities: &[Mobile, Light, Rough],
        text_ref: text(Gita, "6.34"),
        practice: "Massage the feet with warm sesame oil. Sit still for five minutes and count slow breaths. Keep the same bedtime for a week.",
        food: "warm cooked meals at regular times; soaked almonds; warm milk before bed",
        question: "What would you have to feel if you stopped moving?",
        minutes: Some(15),
    },
    RemedyEntry {
        state: "attachment",
        klesha: Klesha::Raga,
        guna: Guna::Tamas,
        qualities: &[Heavy, Oily, Stable],
        text_ref: text(Gita, "2.47"),
        practice: "Hold an object you value and then set it down with open hands. Breathe out slowly each time you release. Write one thing you can do without expecting a result.",
        food: "light warm meals; bitter and astringent greens; ginger tea",
        question: "What would you do if the outcome were not yours to control?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "craving",
        klesha: Klesha::Raga,
        guna: Guna::Rajas,
        qualities: &[Hot, Mobile, Oily],
        text_ref: text(Gita, "3.39"),
        practice: "When the urge rises, wait ten breaths before acting. Notice how the wave peaks and fades. Drink a glass of warm water.",
        food: "regular nourishing meals; steamed vegetables; spiced herbal teas in place of sweets",
        question: "What are you really hungry for beneath this craving?",
        minutes: Some(5),
    },
    RemedyEntry {
        state: "envy",
        klesha: Klesha::Dvesha,
        guna: Guna::Rajas,
        qualities: &[Hot, Sharp, Rough],
        text_ref: text(Gita, "12.13"),
        practice: "Silently wish the person you envy well, three times. Write down what their success shows you about your own desire. Take one step toward it.",
        food: "cooling foods; cilantro and mint; sweet grapes",
        question: "What does their success show you about what you want?",
        minutes: Some(8),
    },
    RemedyEntry {
        state: "self_doubt",
        klesha: Klesha::Asmita,
        guna: Guna::Tamas,
        qualities: &[Heavy, Cold, Slow],
        text_ref: text(Gita, "2.3"),
        practice: "List three things you have done well this month. Stand tall and take five strong breaths. Start one small task and finish it.",
        food: "warm spiced grains; ginger tea; roasted root vegetables",
        question: "What would you try if you trusted yourself a little more?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "burnout",
        klesha: Klesha::Raga,
        guna: Guna::Rajas,
        qualities: &[Hot, Dry, Sharp],
        text_ref: text(Gita, "6.17"),
        practice: "Lie down with legs up the wall for ten minutes. Cancel one obligation this week. Protect eight hours for sleep.",
        food: "coconut water; cooling stews with rice; ghee and sweet root vegetables",
        question: "What are you still carrying that was never yours to carry?",
        minutes: Some(15),
    },
    RemedyEntry {
        state: "fatigue",
        klesha: Klesha::Avidya,
        guna: Guna::Tamas,
        qualities: &[Heavy, Slow, Cold],
        text_ref: text(Gita, "6.16"),
        practice: "Go to bed and wake at the same time for seven days. Take a short walk in the morning sun. Eat your main meal at midday.",
        food: "warm light meals; ginger and cinnamon; stewed apples",
        question: "What drains you that you have stopped noticing?",
        minutes: Some(20),
    },
    RemedyEntry {
        state: "indecision",
        klesha: Klesha::Avidya,
        guna: Guna::Rajas,
        qualities: &[Mobile, Light, Cloudy],
        text_ref: text(Gita, "2.41"),
        practice: "Write each option on its own page. Under each, note how the body feels when you imagine choosing it. Decide by tonight and do not reopen it for a week.",
        food: "warm grounding meals; cooked grains; warm milk with nutmeg",
        question: "If no one would ever judge your choice, which would you make?",
        minutes: Some(15),
    },
    RemedyEntry {
        state: "hopelessness",
        klesha: Klesha::Abhinivesha,
        guna: Guna::Tamas,
        qualities: &[Heavy, Cold, Cloudy],
        text_ref: text(Gita, "6.40"),
        practice: "Step outside and look at the sky for three minutes. Name one thing that went even slightly well today. Tell one person how you are feeling.",
        food: "warm spiced foods; saffron milk; fresh seasonal fruit",
        question: "What is one small thing that could still be different tomorrow?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "control",
        klesha: Klesha::Asmita,
        guna: Guna::Rajas,
        qualities: &[Hard, Sharp, Stable],
        text_ref: text(YogaSutra, "2.45"),
        practice: "Choose one situation today and let someone else decide. Exhale fully and unclench the jaw and hands. Notice what happens without your steering.",
        food: "soft cooked foods; sweet and cooling fruits; chamomile tea",
        question: "What do you fear would happen if you let go of control here?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "rejection_fear",
        klesha: Klesha::Abhinivesha,
        guna: Guna::Rajas,
        qualities: &[Mobile, Cold, Rough],
        text_ref: text(Dhammapada, "228"),
        practice: "Place a hand on the heart and breathe slowly for two minutes. Recall someone who accepts you as you are. Make one small request of someone today.",
        food: "warm comforting meals; sweet potatoes; warm milk with cardamom",
        question: "If you were rejected, what about you would still be true?",
        minutes: Some(8),
    },
    RemedyEntry {
        state: "frustration",
        klesha: Klesha::Dvesha,
        guna: Guna::Rajas,
        qualities: &[Hot, Sharp, Hard],
        text_ref: text(YogaSutra, "2.33"),
        practice: "Shake out the hands and arms for one minute. Breathe in through the nose and sigh out through the mouth five times. Write the opposite of your frustrated thought.",
        food: "cooling foods such as cucumber and melon; mint tea; avoid chili and alcohol",
        question: "What is within your control in this situation?",
        minutes: Some(5),
    },
    RemedyEntry {
        state: "idealism",
        klesha: Klesha::Raga,
        guna: Guna::Sattva,
        qualities: &[Light, Clear, Subtle],
        text_ref: text(Gita, "14.6"),
        practice: "Take one ideal you hold and turn it into a single practical step. Do it with your hands today. Notice the difference between the picture and the act.",
        food: "grounding warm meals; root vegetables; whole grains with ghee",
        question: "Where is your vision asking to touch the ground?",
        minutes: Some(15),
    },
    RemedyEntry {
        state: "spiritual_bypass",
        klesha: Klesha::Avidya,
        guna: Guna::Sattva,
        qualities: &[Light, Subtle, Cold],
        text_ref: text(Dhammapada, "276"),
        practice: "Sit and name one difficult feeling you have been rising above. Let it be present for five breaths without reframing it. Write what it wants you to know.",
        food: "warm nourishing meals; cooked vegetables with ghee; warm spiced milk",
        question: "What feeling have you been calling peace that is really avoidance?",
        minutes: Some(10),
    },
    RemedyEntry {
        state: "overgiving",
        klesha: Klesha::Raga,
        guna: Guna::Sattva,
        qualities: &[Light, Soft, Liquid],
        text_ref: text(Dhammapada, "160"),
        practice: "Say no to one request today. Give yourself the care you usually give others for twenty minutes. Notice who you become when you receive.",
        food: "warm nourishing meals at regular times; soaked nuts; dates and ghee",
        question: "Who takes care of you while you take care of everyone?",
        minutes: Some(20),
    },
];
