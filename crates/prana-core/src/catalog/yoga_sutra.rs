//! Aphorism corpus (Yoga Sutra), English renderings keyed `pada.sutra`.

use super::SacredEntry;

pub(super) static APHORISMS: &[SacredEntry] = &[
    sacred!(YogaSutra, "1.2", [Avidya], [Mobile], [Spirituality],
        "Yoga is the stilling of the movements of the mind."),
    sacred!(YogaSutra, "1.3", [Asmita], [Clear], [Spirituality],
        "Then the seer rests in its own nature."),
    sacred!(YogaSutra, "1.12", [Raga], [Mobile], [],
        "These movements are quieted by practice and by dispassion."),
    sacred!(YogaSutra, "1.13", [Avidya], [Stable], [],
        "Practice is the effort to remain in that stillness."),
    sacred!(YogaSutra, "1.14", [Avidya], [Stable, Slow], [Year],
        "Practice becomes firmly grounded when tended for a long time, without interruption and with devotion."),
    sacred!(YogaSutra, "1.15", [Raga], [Light], [],
        "Dispassion is the mastery of one who no longer thirsts for what is seen or heard of."),
    sacred!(YogaSutra, "1.30", [Avidya], [Heavy, Mobile], [Health],
        "Sickness, dullness, doubt, carelessness, sloth, indulgence, false perception, failing to gain ground and losing it again: these are the distractions of the mind."),
    sacred!(YogaSutra, "1.31", [Abhinivesha], [Heavy, Mobile], [Health],
        "Sorrow, despondency, trembling of the body and uneven breathing come with these distractions."),
    sacred!(YogaSutra, "1.33", [Dvesha], [Clear, Soft], [Love],
        "The mind becomes clear by cultivating friendliness toward the happy, compassion toward the suffering, gladness toward the good and equanimity toward the harmful."),
    sacred!(YogaSutra, "1.34", [Abhinivesha], [Mobile], [Health],
        "Or by the gentle release and holding of the breath."),
    sacred!(YogaSutra, "1.36", [Abhinivesha], [Light, Clear], [Spirituality],
        "Or by attending to an inner light that is serene and beyond sorrow."),
    sacred!(YogaSutra, "1.39", [Avidya], [Mobile], [],
        "Or by meditating on whatever one finds uplifting."),
    sacred!(YogaSutra, "2.1", [Asmita], [Slow], [Spirituality],
        "Discipline, self-study and surrender to the highest make up the yoga of action."),
    sacred!(YogaSutra, "2.2", [Avidya], [Cloudy], [],
        "It is practiced to cultivate absorption and to wear down the afflictions."),
    sacred!(YogaSutra, "2.3", [Avidya, Asmita, Raga, Dvesha, Abhinivesha], [], [],
        "Ignorance, egoism, attachment, aversion and clinging to life are the five afflictions."),
    sacred!(YogaSutra, "2.4", [Avidya], [Cloudy], [],
        "Ignorance is the ground of the others, whether they lie dormant, thin, interrupted or fully active."),
    sacred!(YogaSutra, "2.5", [Avidya], [Cloudy, Gross], [],
        "Ignorance is taking the passing for the lasting, the impure for the pure, pain for pleasure and what is not the self for the self."),
    sacred!(YogaSutra, "2.6", [Asmita], [Hard], [],
        "Egoism is mistaking the instrument of seeing for the one who sees."),
    sacred!(YogaSutra, "2.7", [Raga], [Oily], [],
        "Attachment is what clings to pleasure."),
    sacred!(YogaSutra, "2.8", [Dvesha], [Hot, Rough], [],
        "Aversion is what clings to pain."),
    sacred!(YogaSutra, "2.9", [Abhinivesha], [Cold, Mobile], [],
        "Clinging to life, carried by its own momentum, is rooted even in the wise."),
    sacred!(YogaSutra, "2.10", [Avidya], [Subtle], [],
        "In their subtle form the afflictions are dissolved by tracing them back to their source."),
    sacred!(YogaSutra, "2.11", [Raga, Dvesha], [Mobile], [Spirituality],
        "Their active forms are quieted by meditation."),
    sacred!(YogaSutra, "2.16", [Abhinivesha], [Cold], [Year],
        "Suffering that has not yet come can be avoided."),
    sacred!(YogaSutra, "2.26", [Avidya], [Clear], [],
        "Unwavering discernment is the means of freedom."),
    sacred!(YogaSutra, "2.33", [Dvesha, Avidya], [Hot], [],
        "When troubled by harmful thoughts, cultivate their opposites."),
    sacred!(YogaSutra, "2.34", [Dvesha, Raga], [Hot, Sharp], [],
        "Harmful thoughts, whether acted on, caused or condoned, born of greed, anger or delusion, mild or intense, ripen into endless pain and ignorance; so cultivate the opposite."),
    sacred!(YogaSutra, "2.35", [Dvesha], [Soft], [Love],
        "In the presence of one settled in non-violence, hostility falls away."),
    sacred!(YogaSutra, "2.36", [Asmita], [Clear], [Career],
        "For one settled in truthfulness, actions bear their intended fruit."),
    sacred!(YogaSutra, "2.38", [Raga], [Dense], [Health],
        "For one settled in moderation, vitality is gained."),
    sacred!(YogaSutra, "2.39", [Raga], [Light], [],
        "For one settled in non-grasping, the meaning of one's life becomes clear."),
    sacred!(YogaSutra, "2.42", [Raga], [Stable, Light], [],
        "From contentment comes unsurpassed happiness."),
    sacred!(YogaSutra, "2.43", [Avidya], [Hot], [Health],
        "Through discipline impurities are burned away and the body and senses are refined."),
    sacred!(YogaSutra, "2.44", [Asmita], [Subtle], [Spirituality],
        "Through self-study comes communion with what one holds highest."),
    sacred!(YogaSutra, "2.45", [Asmita], [Soft], [Spirituality],
        "Through surrender to the highest comes complete absorption."),
    sacred!(YogaSutra, "2.46", [Raga], [Stable, Soft], [Health],
        "The posture should be steady and at ease."),
    sacred!(YogaSutra, "2.47", [Asmita], [Hard], [Health],
        "By relaxing effort and resting attention on the infinite, posture is mastered."),
    sacred!(YogaSutra, "2.48", [Raga, Dvesha], [Stable], [],
        "From that, one is no longer shaken by the pairs of opposites."),
    sacred!(YogaSutra, "2.49", [Abhinivesha], [Mobile], [Health],
        "Breath regulation is the pause between the flow of inhalation and exhalation."),
    sacred!(YogaSutra, "2.52", [Avidya], [Cloudy, Clear], [],
        "From that, the veil over the inner light thins away."),
    sacred!(YogaSutra, "2.54", [Raga], [Mobile], [],
        "Withdrawal of the senses is their turning away from objects, following the mind inward."),
    sacred!(YogaSutra, "3.1", [Avidya], [Mobile], [],
        "Concentration is binding the mind to one place."),
    sacred!(YogaSutra, "3.2", [Avidya], [Liquid], [Spirituality],
        "Meditation is the unbroken flow of awareness toward that place."),
];
