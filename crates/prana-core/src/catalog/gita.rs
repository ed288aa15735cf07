//! Numbered-verse corpus (Bhagavad Gita), English renderings keyed `chapter.verse`.

use super::SacredEntry;

pub(super) static VERSES: &[SacredEntry] = &[
    sacred!(Gita, "2.3", [Abhinivesha, Asmita], [Heavy, Slow], [],
        "Do not yield to faint-heartedness; it does not become you. Cast off this petty weakness of heart and stand up."),
    sacred!(Gita, "2.7", [Avidya], [Cloudy, Mobile], [],
        "My mind is confused about what is right and my nature is overcome by weakness. Tell me plainly what is good for me."),
    sacred!(Gita, "2.11", [Abhinivesha, Raga], [Heavy, Cold], [],
        "You grieve for those who need no grief. The wise mourn neither for the living nor for the dead."),
    sacred!(Gita, "2.13", [Abhinivesha], [Mobile], [Health],
        "As the embodied one passes through childhood, youth and old age, so it passes into another body; the steady are not bewildered by this."),
    sacred!(Gita, "2.14", [Raga, Dvesha], [Cold, Hot, Mobile], [],
        "Contacts of the senses bring cold and heat, pleasure and pain. They come and go and do not last; endure them patiently."),
    sacred!(Gita, "2.15", [Raga, Dvesha], [Stable], [],
        "The one who is not troubled by these, who stays the same in pleasure and in pain, is fit for freedom."),
    sacred!(Gita, "2.20", [Abhinivesha], [Subtle, Stable], [Spirituality],
        "It is never born and never dies. Having been, it will not cease to be. Unborn and lasting, it is not slain when the body is slain."),
    sacred!(Gita, "2.22", [Abhinivesha], [Light], [Spirituality],
        "As a person casts off worn-out garments and puts on new ones, so the embodied self casts off worn-out bodies and enters others."),
    sacred!(Gita, "2.27", [Abhinivesha], [Heavy], [],
        "Death is certain for the born and birth for the dead; do not grieve over what cannot be avoided."),
    sacred!(Gita, "2.38", [Raga, Dvesha], [Stable], [Career],
        "Treat alike pleasure and pain, gain and loss, victory and defeat, and then act. So you will incur no harm."),
    sacred!(Gita, "2.40", [Abhinivesha], [Slow], [],
        "On this path no effort is wasted and no harm is done. Even a little of this practice protects from great fear."),
    sacred!(Gita, "2.41", [Avidya], [Mobile, Cloudy], [Career],
        "The resolute mind is single-pointed; the thoughts of the irresolute are many-branched and endless."),
    sacred!(Gita, "2.47", [Raga], [Mobile, Sharp], [Career],
        "Your right is to the work alone, never to its fruits. Do not let the fruit be your motive, and do not cling to inaction."),
    sacred!(Gita, "2.48", [Raga, Dvesha], [Stable, Smooth], [Career],
        "Established in yoga, act without attachment, even in success and failure. Evenness of mind is called yoga."),
    sacred!(Gita, "2.50", [Avidya], [Clear], [Career],
        "One united with wisdom lets go of both good and bad deeds here. Yoga is skill in action."),
    sacred!(Gita, "2.55", [Raga], [Stable, Clear], [],
        "When one gives up every craving of the mind and is content in the self by the self, one is called steady in wisdom."),
    sacred!(Gita, "2.56", [Abhinivesha, Dvesha, Raga], [Stable], [],
        "One whose mind is not shaken in sorrow, who has no longing in pleasure, free from passion, fear and anger, is a sage of steady mind."),
    sacred!(Gita, "2.58", [Raga], [Mobile, Subtle], [Spirituality],
        "When, like a tortoise drawing in its limbs, one withdraws the senses from their objects, wisdom becomes steady."),
    sacred!(Gita, "2.62", [Raga, Dvesha], [Hot, Mobile], [],
        "Dwelling on objects, attachment to them arises. From attachment comes desire, and from desire anger is born."),
    sacred!(Gita, "2.63", [Dvesha, Avidya], [Hot, Cloudy], [],
        "From anger comes delusion, from delusion the loss of memory, from that the ruin of discernment, and then one is lost."),
    sacred!(Gita, "2.64", [Raga, Dvesha], [Smooth, Clear], [],
        "Moving among objects with senses free from attraction and aversion, the self-governed one attains serenity."),
    sacred!(Gita, "2.66", [Avidya], [Mobile], [Spirituality],
        "Without steadiness there is no wisdom, without meditation no peace; and for the one without peace, where is happiness?"),
    sacred!(Gita, "2.70", [Raga], [Stable, Liquid], [],
        "As rivers pour into the ocean, which is ever filled yet stays unmoved, so the one into whom desires flow finds peace, not the one who chases them."),
    sacred!(Gita, "2.71", [Raga, Asmita], [Light], [],
        "Whoever abandons all desires and moves through life free from longing, without 'mine' and without ego, attains peace."),
    sacred!(Gita, "3.5", [Avidya], [Slow, Heavy], [Career],
        "No one can remain even for a moment without acting; everyone is driven to act by the qualities born of nature."),
    sacred!(Gita, "3.8", [Avidya], [Heavy, Slow], [Career, Health],
        "Do the work that is yours, for action is better than inaction. Even the upkeep of the body would not be possible without action."),
    sacred!(Gita, "3.19", [Raga], [Slow], [Career],
        "Therefore, without attachment, always do the work that has to be done. Working without attachment, one reaches the highest."),
    sacred!(Gita, "3.21", [Asmita], [Gross], [Career],
        "Whatever a great person does, others follow. Whatever standard they set, the world goes by it."),
    sacred!(Gita, "3.27", [Asmita, Avidya], [Hard], [],
        "All actions are carried out by the qualities of nature; deluded by ego, one thinks 'I am the doer'."),
    sacred!(Gita, "3.30", [Asmita, Raga], [Hot], [],
        "Surrender every action to me, with the mind resting in the self, free from hope and from ownership. Act, free from fever."),
    sacred!(Gita, "3.35", [Asmita], [Sharp], [Career],
        "Better one's own duty done imperfectly than another's duty done well."),
    sacred!(Gita, "3.37", [Raga, Dvesha], [Hot, Sharp], [],
        "It is desire, it is anger, born of the quality of passion, all-devouring. Know this to be the enemy here."),
    sacred!(Gita, "3.39", [Raga], [Hot], [],
        "Wisdom is veiled by this constant enemy of the wise in the form of desire, which burns like an insatiable fire."),
    sacred!(Gita, "3.42", [Avidya], [Subtle], [Spirituality],
        "The senses are above the body, the mind above the senses, the intellect above the mind; and beyond the intellect is the self."),
    sacred!(Gita, "3.43", [Raga], [Stable], [],
        "Knowing the self as beyond the intellect, steady the self by the self and overcome the enemy in the form of desire, so hard to conquer."),
    sacred!(Gita, "4.18", [Avidya], [Clear], [],
        "One who sees inaction in action and action in inaction is wise among people; such a one acts fully and remains free."),
    sacred!(Gita, "4.19", [Raga], [Clear, Hot], [],
        "One whose undertakings are free from craving and scheming, whose actions are burned clean in the fire of knowledge, the wise call learned."),
    sacred!(Gita, "4.20", [Raga], [Light], [Career],
        "Letting go of attachment to results, ever content and dependent on nothing, though fully engaged in action, one does nothing at all."),
    sacred!(Gita, "4.22", [Raga, Dvesha], [Stable], [],
        "Content with what comes unasked, beyond the pairs of opposites, free from envy, even in success and failure, one is not bound."),
    sacred!(Gita, "4.36", [Asmita, Avidya], [Heavy], [],
        "Even if you were the worst of wrongdoers, you would cross over all wrong by the raft of knowledge alone."),
    sacred!(Gita, "4.38", [Avidya], [Clear], [Spirituality],
        "There is nothing here as purifying as knowledge. One perfected in yoga finds it within, in due time."),
    sacred!(Gita, "4.39", [Avidya], [Clear], [Spirituality],
        "One with faith, devoted and master of the senses, gains knowledge, and having gained it soon reaches supreme peace."),
    sacred!(Gita, "4.40", [Avidya], [Mobile, Cloudy], [],
        "The one who is ignorant, faithless and full of doubt is lost. For the doubting there is neither this world nor the next, nor happiness."),
    sacred!(Gita, "4.42", [Avidya], [Cloudy, Sharp], [],
        "Cut with the sword of knowledge this doubt born of ignorance that lives in your heart. Take refuge in yoga and rise."),
    sacred!(Gita, "5.3", [Raga, Dvesha], [Light], [],
        "Know as a true renouncer the one who neither hates nor craves. Free from the pairs of opposites, one is easily released from bondage."),
    sacred!(Gita, "5.10", [Raga], [Oily, Smooth], [],
        "One who acts, offering actions to the infinite and letting go of attachment, is untouched by wrong, as a lotus leaf by water."),
    sacred!(Gita, "5.18", [Asmita], [Stable], [],
        "The wise see with an equal eye a learned and humble sage, a cow, an elephant, a dog and an outcast."),
    sacred!(Gita, "5.20", [Raga, Dvesha], [Stable], [],
        "Do not rejoice on obtaining what is pleasant, nor grieve on meeting what is unpleasant. Steady and clear-minded, one abides in the infinite."),
    sacred!(Gita, "5.21", [Raga], [Subtle], [],
        "With the self unattached to outer contacts, one finds the happiness that lives within."),
    sacred!(Gita, "5.22", [Raga], [Gross], [],
        "Pleasures born of contact are sources of pain. They have a beginning and an end, and the wise do not delight in them."),
    sacred!(Gita, "5.23", [Raga, Dvesha], [Hot], [Health],
        "One who can withstand the surge of desire and anger here, before leaving the body, is a yogi and a happy person."),
    sacred!(Gita, "5.26", [Raga, Dvesha], [Hot, Mobile], [],
        "Freedom lies close to those who are free from desire and anger, who have steadied their thoughts and know the self."),
    sacred!(Gita, "6.5", [Asmita], [Heavy, Slow], [],
        "Lift yourself by your own self; do not let yourself sink. The self alone is the friend of the self, and the self alone its enemy."),
    sacred!(Gita, "6.6", [Asmita, Dvesha], [Hard], [],
        "The self is a friend to one who has mastered it; for one who has not, the self behaves like an enemy."),
    sacred!(Gita, "6.7", [Asmita], [Cold, Hot, Stable], [],
        "The one who has mastered the self and is at peace stays composed in cold and heat, pleasure and pain, honor and dishonor."),
    sacred!(Gita, "6.10", [Raga], [Mobile], [Spirituality],
        "Let the yogi steady the mind continually, resting in solitude, with mind and body composed, free from longing and possessions."),
    sacred!(Gita, "6.16", [Raga], [Heavy, Light], [Health],
        "Yoga is not for one who eats too much or not at all, nor for one who sleeps too much or stays awake too long."),
    sacred!(Gita, "6.17", [Raga], [Stable], [Health],
        "For one who is moderate in food and recreation, in effort at work, in sleep and in waking, yoga removes all sorrow."),
    sacred!(Gita, "6.19", [Avidya], [Mobile, Stable], [Spirituality],
        "As a lamp in a windless place does not flicker: such is the steadied mind of the one who practices."),
    sacred!(Gita, "6.23", [Abhinivesha], [Heavy], [],
        "Let this be known as yoga: the unlinking from union with pain. Practice it with resolve and an undismayed mind."),
    sacred!(Gita, "6.25", [Avidya], [Mobile, Slow], [],
        "Little by little let one grow quiet, with the intellect held in firmness; resting the mind in the self, let one think of nothing else."),
    sacred!(Gita, "6.26", [Avidya], [Mobile, Rough], [],
        "Wherever the restless, unsteady mind wanders, from there draw it back and bring it home to the self."),
    sacred!(Gita, "6.32", [Dvesha, Asmita], [Smooth], [Love],
        "One who weighs the joy and sorrow of every being by the same measure they apply to themselves is the highest yogi."),
    sacred!(Gita, "6.34", [Avidya], [Mobile, Rough], [],
        "The mind is restless, turbulent, strong and stubborn. It seems as hard to hold as the wind."),
    sacred!(Gita, "6.35", [Raga, Avidya], [Mobile], [],
        "No doubt the mind is restless and hard to restrain; yet by practice and by dispassion it is held."),
    sacred!(Gita, "6.40", [Abhinivesha], [Heavy], [],
        "Neither in this world nor the next is there ruin for one who does good. No one who does good comes to a bad end."),
    sacred!(Gita, "7.14", [Avidya], [Cloudy], [Spirituality],
        "This play of appearances, woven of the qualities, is hard to cross; those who take refuge in me cross over it."),
    sacred!(Gita, "7.27", [Raga, Dvesha, Avidya], [Cloudy], [],
        "All beings are born into confusion, overcome by the pairs of opposites that arise from desire and aversion."),
    sacred!(Gita, "8.6", [Abhinivesha], [Subtle], [Spirituality],
        "Whatever state one remembers when leaving the body, to that one goes, having long been absorbed in it."),
    sacred!(Gita, "9.22", [Abhinivesha], [Light], [Spirituality],
        "To those who rest their thoughts on me alone, ever devoted, I bring what they lack and keep safe what they have."),
    sacred!(Gita, "9.26", [Asmita], [Light, Soft], [Love],
        "Whoever offers me with love a leaf, a flower, a fruit or a little water, that offering of the heart I accept."),
    sacred!(Gita, "9.27", [Asmita], [Light], [Spirituality],
        "Whatever you do, whatever you eat, whatever you give, whatever effort you make, do it as an offering."),
    sacred!(Gita, "9.30", [Asmita], [Heavy], [],
        "Even one of very bad conduct who turns to me with undivided devotion is to be counted as good, for they have resolved rightly."),
    sacred!(Gita, "9.31", [Abhinivesha], [Heavy], [],
        "Quickly they become good and reach lasting peace. Know for certain that the one devoted to me never perishes."),
    sacred!(Gita, "10.20", [Avidya], [Subtle], [Spirituality],
        "I am the self seated in the heart of every being; I am the beginning, the middle and the end of all that lives."),
    sacred!(Gita, "12.13", [Dvesha, Asmita], [Soft, Smooth], [Love],
        "One who bears ill will to no being, who is friendly and compassionate, free from 'mine' and from ego, even in pain and pleasure, and forgiving."),
    sacred!(Gita, "12.15", [Abhinivesha, Dvesha], [Mobile, Stable], [],
        "One by whom the world is not disturbed and who is not disturbed by the world, free from elation, envy, fear and anxiety, is dear to me."),
    sacred!(Gita, "12.16", [Raga], [Light], [],
        "One who expects nothing, who is pure and capable, unconcerned and untroubled, letting go of every scheme, is dear to me."),
    sacred!(Gita, "12.17", [Raga, Dvesha], [Stable], [],
        "One who neither rejoices nor hates, neither grieves nor craves, letting go of good and bad alike, full of devotion, is dear to me."),
    sacred!(Gita, "12.18", [Raga, Dvesha, Asmita], [Cold, Hot], [Love],
        "The same to foe and friend, in honor and dishonor, in cold and heat, in pleasure and pain, free from attachment."),
    sacred!(Gita, "12.19", [Asmita], [Stable], [],
        "Equal in blame and praise, quiet, content with whatever comes, at home anywhere, steady-minded and devoted: such a one is dear to me."),
    sacred!(Gita, "13.8", [Asmita], [Soft], [],
        "Humility, sincerity, non-violence, patience, uprightness, service to the teacher, purity, steadfastness and self-restraint."),
    sacred!(Gita, "13.9", [Asmita, Abhinivesha], [Heavy], [Health],
        "Dispassion toward the objects of the senses, absence of ego, and clear insight into the pain of birth, death, old age and sickness."),
    sacred!(Gita, "14.6", [Raga], [Clear, Light], [],
        "Of these, sattva, being stainless, is luminous and free from harm; yet it binds by attachment to happiness and to knowledge."),
    sacred!(Gita, "14.7", [Raga], [Mobile, Hot], [Career],
        "Know rajas as passion, the source of thirst and attachment; it binds the embodied one through attachment to action."),
    sacred!(Gita, "14.8", [Avidya], [Heavy, Slow, Cloudy], [],
        "Know tamas as born of ignorance, deluding all beings; it binds through heedlessness, sloth and sleep."),
    sacred!(Gita, "14.13", [Avidya], [Heavy, Cloudy], [],
        "Darkness, inertia, heedlessness and confusion arise when tamas prevails."),
    sacred!(Gita, "14.24", [Raga, Dvesha], [Stable], [],
        "Alike in pleasure and pain, resting in the self, seeing a clod, a stone and gold as one, the same toward the welcome and the unwelcome, firm, equal in blame and praise."),
    sacred!(Gita, "14.25", [Asmita], [Stable], [],
        "The same in honor and dishonor, the same to friend and foe, letting go of every enterprise: such a one has gone beyond the qualities."),
    sacred!(Gita, "15.5", [Asmita, Raga], [Clear], [Spirituality],
        "Free from pride and delusion, having conquered the fault of attachment, ever dwelling in the self, desires turned away, the undeluded reach the lasting goal."),
    sacred!(Gita, "16.1", [Abhinivesha], [Clear], [],
        "Fearlessness, purity of heart, steadfastness in knowledge and practice, generosity, self-restraint, study and uprightness."),
    sacred!(Gita, "16.2", [Dvesha, Raga], [Soft, Cold], [Love],
        "Non-violence, truth, freedom from anger, renunciation, peacefulness, absence of slander, compassion for beings, freedom from greed, gentleness and modesty."),
    sacred!(Gita, "16.3", [Dvesha, Asmita], [Soft], [],
        "Vigor, forgiveness, fortitude, purity, absence of malice and of pride: these belong to one born to a bright nature."),
    sacred!(Gita, "16.4", [Asmita, Dvesha], [Hard, Hot, Rough], [],
        "Hypocrisy, arrogance, conceit, anger, harshness and ignorance belong to one born to a dark nature."),
    sacred!(Gita, "16.21", [Raga, Dvesha], [Hot], [],
        "Threefold is the gate to ruin of the self: desire, anger and greed. Therefore let these three be given up."),
    sacred!(Gita, "17.8", [Raga], [Oily, Heavy], [Health],
        "Foods that increase life, clarity, strength, health, joy and cheer, that are savory, rich, sustaining and agreeable, are dear to the pure."),
    sacred!(Gita, "17.9", [Raga], [Hot, Dry, Sharp], [Health],
        "Foods that are bitter, sour, salty, very hot, pungent, dry and burning are liked by the restless and bring pain, grief and disease."),
    sacred!(Gita, "17.10", [Avidya], [Heavy, Cloudy], [Health],
        "Food that is stale, tasteless, spoiled and impure is dear to the dull."),
    sacred!(Gita, "17.15", [Dvesha], [Soft, Smooth], [Love],
        "Words that cause no distress, that are true, kind and helpful, and the regular study of wisdom, are called the discipline of speech."),
    sacred!(Gita, "17.16", [Dvesha], [Clear, Soft], [],
        "Serenity of mind, gentleness, silence, self-restraint and purity of heart: this is called the discipline of the mind."),
    sacred!(Gita, "18.26", [Asmita, Raga], [Stable], [Career],
        "Free from attachment, without boasting, full of resolve and enthusiasm, unmoved by success or failure: such a doer is called pure."),
    sacred!(Gita, "18.37", [Raga], [Clear], [],
        "That which is like poison at first and like nectar in the end, born of a clear mind, is called pure happiness."),
    sacred!(Gita, "18.38", [Raga], [Hot, Gross], [],
        "That which arises from the meeting of senses and objects, like nectar at first and like poison in the end, is called restless happiness."),
    sacred!(Gita, "18.47", [Asmita], [Sharp], [Career],
        "Better one's own path, though imperfect, than another's well followed. Doing the work born of one's own nature, one incurs no fault."),
    sacred!(Gita, "18.48", [Asmita], [Sharp, Hard], [Career],
        "Do not abandon the work born of your nature even if it has flaws; every undertaking is clouded by flaws, as fire is by smoke."),
    sacred!(Gita, "18.58", [Asmita], [Hard], [],
        "Resting your mind in me, you will cross every obstacle; but if from pride you will not listen, you will be lost."),
    sacred!(Gita, "18.63", [Avidya], [Clear], [Year],
        "Wisdom deeper than all secrets has now been shared with you. Reflect on it fully, then act as you choose."),
    sacred!(Gita, "18.66", [Abhinivesha], [Heavy], [Spirituality],
        "Letting go of every other support, take refuge in me alone. I will free you from all wrong; do not grieve."),
    sacred!(Gita, "18.73", [Avidya], [Clear, Stable], [Year],
        "My confusion is gone and my memory restored. I stand firm, my doubts dispelled, and I will act."),
];
