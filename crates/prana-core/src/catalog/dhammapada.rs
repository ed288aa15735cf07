//! Short-saying corpus (Dhammapada), English renderings keyed by verse number.

use super::SacredEntry;

pub(super) static SAYINGS: &[SacredEntry] = &[
    sacred!(Dhammapada, "1", [Avidya], [Cloudy], [],
        "Mind comes first; things are shaped and led by mind. Act with a troubled mind and suffering follows, as the wheel follows the ox."),
    sacred!(Dhammapada, "2", [Avidya], [Clear, Light], [],
        "Act or speak with a clear mind and happiness follows, like a shadow that never leaves."),
    sacred!(Dhammapada, "3", [Dvesha], [Hot, Hard], [Love],
        "'They insulted me, they hurt me, they beat me, they robbed me.' In those who hold such thoughts, hatred does not cease."),
    sacred!(Dhammapada, "5", [Dvesha], [Hot, Sharp], [Love],
        "Hatred is never ended by hatred in this world; by non-hatred alone is hatred ended. This is an ancient law."),
    sacred!(Dhammapada, "6", [Abhinivesha, Dvesha], [Hard], [Love],
        "Many forget that we all must pass away. Those who remember it let their quarrels end."),
    sacred!(Dhammapada, "21", [Avidya, Abhinivesha], [Heavy, Slow], [],
        "Heedfulness is the path to the deathless, heedlessness the path to death. The heedful do not die; the heedless are as if dead already."),
    sacred!(Dhammapada, "25", [Abhinivesha], [Stable], [Career],
        "By effort, heedfulness, discipline and self-mastery, let the wise build an island no flood can overwhelm."),
    sacred!(Dhammapada, "33", [Avidya], [Mobile], [],
        "The flickering, fickle mind, hard to guard and hard to hold, the wise make straight as a fletcher straightens an arrow."),
    sacred!(Dhammapada, "35", [Avidya], [Mobile, Light], [],
        "Good is the taming of the mind, so hard to hold, so quick, landing wherever it likes. A tamed mind brings happiness."),
    sacred!(Dhammapada, "40", [Raga, Abhinivesha], [Stable], [Health],
        "Knowing this body is fragile as a clay jar, make the mind firm as a walled city and meet desire with the weapon of wisdom."),
    sacred!(Dhammapada, "42", [Dvesha, Avidya], [Sharp], [],
        "Whatever harm an enemy may do to an enemy, or a hater to a hater, a wrongly directed mind can do one greater harm."),
    sacred!(Dhammapada, "43", [Avidya], [Clear], [],
        "Neither mother, nor father, nor any relative can do one greater good than one's own well-directed mind."),
    sacred!(Dhammapada, "50", [Asmita, Dvesha], [Sharp], [Love],
        "Do not look at the faults of others, at what they have done or left undone; look at what you yourself have done and left undone."),
    sacred!(Dhammapada, "62", [Raga, Asmita], [Heavy], [],
        "'These children are mine, this wealth is mine': so the fool torments themselves. One does not even own oneself; how then children, how wealth?"),
    sacred!(Dhammapada, "76", [Asmita], [Hard], [Career],
        "If you find a wise person who points out your faults, follow them as you would a guide to hidden treasure."),
    sacred!(Dhammapada, "80", [Asmita], [Hard, Smooth], [Career],
        "Irrigators guide the water, fletchers shape the arrow, carpenters bend the wood; the wise shape themselves."),
    sacred!(Dhammapada, "81", [Asmita], [Stable, Dense], [],
        "As a solid rock is not shaken by the wind, so the wise are not moved by praise or blame."),
    sacred!(Dhammapada, "82", [Avidya], [Clear, Liquid], [Spirituality],
        "As a deep lake is clear and still, so the wise become calm on hearing the truth."),
    sacred!(Dhammapada, "100", [Avidya], [Mobile], [],
        "Better than a thousand empty words is one meaningful word that brings peace to the one who hears it."),
    sacred!(Dhammapada, "103", [Asmita], [Sharp, Hot], [Career],
        "One may conquer a thousand times a thousand in battle, yet the one who conquers oneself is the greatest victor."),
    sacred!(Dhammapada, "116", [Avidya], [Slow, Heavy], [],
        "Hurry toward the good and hold the mind back from harm. When one is slow to do good, the mind takes pleasure in harm."),
    sacred!(Dhammapada, "121", [Avidya], [Liquid], [],
        "Do not think lightly of harm, saying 'it will not come to me'. Drop by drop the water jar is filled."),
    sacred!(Dhammapada, "122", [Avidya], [Slow], [Year],
        "Do not think lightly of good, saying 'it will not come to me'. Drop by drop the wise are filled with good."),
    sacred!(Dhammapada, "129", [Abhinivesha, Dvesha], [Cold], [Love],
        "All tremble at violence, all fear death. Putting yourself in the place of another, do not harm and do not cause harm."),
    sacred!(Dhammapada, "131", [Dvesha], [Hot], [],
        "Whoever, seeking their own happiness, harms others who also long for happiness will not find happiness."),
    sacred!(Dhammapada, "133", [Dvesha], [Hot, Rough], [Love],
        "Do not speak harshly to anyone; those spoken to will answer in kind. Angry words bring pain, and blows may come back to you."),
    sacred!(Dhammapada, "160", [Abhinivesha, Asmita], [Stable], [],
        "You are your own refuge; who else could be your refuge? With yourself well tamed, you gain a refuge hard to find."),
    sacred!(Dhammapada, "165", [Asmita], [Clear], [],
        "By oneself harm is done, by oneself one is stained. By oneself harm is left undone, by oneself one is made clean."),
    sacred!(Dhammapada, "183", [Avidya], [Clear], [Spirituality],
        "To avoid all harm, to cultivate the good, and to purify one's own mind: this is the teaching of the awakened."),
    sacred!(Dhammapada, "197", [Dvesha], [Soft], [Love],
        "Happily we live, friendly among the hostile; among hostile people we live free from hatred."),
    sacred!(Dhammapada, "200", [Raga], [Light], [],
        "Happily we live, we who own nothing; we shall feed on joy like the radiant ones."),
    sacred!(Dhammapada, "201", [Dvesha, Asmita], [Hot], [Career],
        "Victory breeds hatred; the defeated live in pain. The peaceful live happily, setting aside both victory and defeat."),
    sacred!(Dhammapada, "202", [Raga, Dvesha], [Hot], [],
        "There is no fire like passion, no misfortune like hatred, no pain like this burdened existence, no happiness higher than peace."),
    sacred!(Dhammapada, "204", [Raga], [Light, Stable], [Health],
        "Health is the greatest gift, contentment the greatest wealth, trust the best of relatives, and peace the highest happiness."),
    sacred!(Dhammapada, "211", [Raga, Abhinivesha], [Heavy], [Love],
        "Hold nothing too dear, for losing the dear is painful. There are no bonds for one who has neither likes nor dislikes."),
    sacred!(Dhammapada, "212", [Raga, Abhinivesha], [Cold, Heavy], [Love],
        "From what is dear comes grief, from what is dear comes fear. For one free from clinging to the dear there is no grief, let alone fear."),
    sacred!(Dhammapada, "215", [Raga, Abhinivesha], [Cold], [],
        "From craving comes grief, from craving comes fear. For one free from craving there is no grief, let alone fear."),
    sacred!(Dhammapada, "221", [Dvesha, Asmita], [Hot, Hard], [],
        "Let go of anger, let go of pride, move past every fetter. Suffering does not come to one who clings to neither name nor form."),
    sacred!(Dhammapada, "222", [Dvesha], [Hot, Mobile], [],
        "Whoever holds back rising anger as one checks a rolling chariot, that one I call a true driver; others only hold the reins."),
    sacred!(Dhammapada, "223", [Dvesha, Raga], [Hot, Sharp], [Love],
        "Overcome anger with calm, harm with good, stinginess with giving, and lies with truth."),
    sacred!(Dhammapada, "227", [Asmita], [Sharp], [],
        "This is an old saying: they blame the silent, they blame those who talk much, they blame those who speak little. No one in the world escapes blame."),
    sacred!(Dhammapada, "228", [Asmita, Abhinivesha], [Stable], [],
        "There never was, never will be, and is not now anyone who is only blamed or only praised."),
    sacred!(Dhammapada, "231", [Dvesha], [Hot], [Health],
        "Guard against anger that erupts through the body. Restrain the body and live well in it."),
    sacred!(Dhammapada, "239", [Avidya], [Slow], [Year],
        "Little by little, moment by moment, the wise remove their own impurities, as a smith removes the dross from silver."),
    sacred!(Dhammapada, "251", [Raga, Dvesha, Avidya], [Hot, Liquid], [],
        "There is no fire like passion, no grip like hatred, no net like delusion, no river like craving."),
    sacred!(Dhammapada, "252", [Asmita, Dvesha], [Sharp], [Love],
        "The faults of others are easy to see, one's own hard to see. One winnows others' faults like chaff but hides one's own."),
    sacred!(Dhammapada, "276", [Avidya], [Slow, Heavy], [Spirituality],
        "You must make the effort yourself; the awakened only show the way. Those who meditate are freed from bondage."),
    sacred!(Dhammapada, "277", [Abhinivesha, Raga], [Mobile], [],
        "'All conditioned things pass away.' Seeing this with wisdom, one turns away from suffering. This is the path to purity."),
    sacred!(Dhammapada, "280", [Avidya], [Heavy, Slow], [Career],
        "Whoever does not rise when it is time to rise, who though young and strong is full of sloth and weak in resolve, does not find the way."),
    sacred!(Dhammapada, "282", [Avidya], [Clear], [Spirituality],
        "From meditation wisdom grows; without meditation it fades. Knowing these two paths, live so that wisdom increases."),
    sacred!(Dhammapada, "290", [Raga], [Gross], [],
        "If by giving up a small happiness one may see a greater happiness, let the wise give up the small for the sake of the great."),
    sacred!(Dhammapada, "305", [Raga], [Stable], [],
        "Sitting alone, resting alone, walking alone without sloth, whoever tames themselves alone finds delight at the forest's edge."),
    sacred!(Dhammapada, "327", [Avidya], [Heavy, Dense], [],
        "Delight in heedfulness and guard your mind well. Pull yourself out of the mire, as an elephant sunk in mud draws itself free."),
    sacred!(Dhammapada, "334", [Raga], [Mobile], [],
        "The craving of one who lives heedlessly grows like a creeping vine. Such a one leaps from place to place like a monkey looking for fruit."),
    sacred!(Dhammapada, "335", [Raga], [Oily, Heavy], [],
        "Whoever is overcome by this clinging, sticky craving sees sorrows grow like grass after rain."),
    sacred!(Dhammapada, "336", [Raga], [Liquid, Smooth], [],
        "Whoever overcomes this craving, so hard to overcome, sees sorrows fall away like drops of water from a lotus leaf."),
    sacred!(Dhammapada, "348", [Raga, Abhinivesha], [Light], [Year],
        "Let go of the past, let go of the future, let go of the present, and cross to the far shore. With the mind free everywhere, you will not return to fear and decay."),
    sacred!(Dhammapada, "354", [Raga], [Clear], [],
        "The gift of truth surpasses every gift, the taste of truth every taste, the joy of truth every joy. The end of craving ends all sorrow."),
    sacred!(Dhammapada, "368", [Dvesha], [Soft], [Love],
        "Whoever lives in loving-kindness, trusting the teaching, reaches peace, the happiness of a mind at rest."),
    sacred!(Dhammapada, "379", [Asmita], [Slow], [],
        "Rouse yourself by yourself, examine yourself by yourself. Self-guarded and mindful, you will live happily."),
    sacred!(Dhammapada, "380", [Abhinivesha], [Stable], [],
        "You are your own protector, you are your own refuge. So tend yourself as a merchant tends a fine horse."),
];
