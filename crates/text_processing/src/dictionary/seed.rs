//! Built-in seed table used when no CSV source can be read

pub(super) const SEED: &[(&str, &str)] = &[
    ("नमस्ते", "जोहार"), ("धन्यवाद", "सोनोज़"), ("हाँ", "एले"),
    ("नहीं", "माहा"), ("पानी", "तुरु"), ("खाना", "होपोर्"),
    ("दिन", "अदिल"), ("रात", "राति"), ("सूरज", "सूर्य"),
    ("चाँद", "चंद्र"), ("आँख", "मेंदा"), ("कान", "कुलु"),
    ("नाक", "नाटा"), ("दांत", "दाँत"), ("हाथ", "सेल"),
    ("पैर", "होरो"), ("सिर", "जोहोल"), ("हृदय", "हिया"),
    ("रक्त", "कु"), ("घर", "ओडि"), ("गली", "पथा"),
    ("मार्ग", "पथा"), ("विद्यालय", "स्कूल"), ("पुस्तक", "किताब"),
    ("कलम", "लिख"), ("कागज", "कागद"), ("शिक्षक", "सिक्षक"),
    ("विद्यार्थी", "छात्र"), ("हेलो", "हेलो"), ("अलविदा", "अलविदा"),
    ("प्रणाम", "जोहार"), ("आपका स्वागत है", "जोहार"), ("कैसे हो", "की कोडा"),
    ("ठीक हूँ", "अक्छे छिहै"), ("क्या नाम है", "ने नाय की छिहै"), ("मेरा नाम", "अम् नाय"),
    ("कृपया", "माइ"), ("मदद", "दीरी"), ("पसंद", "दिसाग"),
    ("प्रेम", "लेबे"), ("दोस्त", "दोस्त"), ("परिवार", "हातेम"),
    ("माता", "अय"), ("पिता", "अप"), ("भाई", "आयत"),
    ("बहन", "तांग"), ("बेटा", "पोरो"), ("बेटी", "पोरोय"),
    ("पत्नी", "पेंत"), ("पति", "अवोर"), ("बुजुर्ग", "बोड़ो"),
    ("बच्चा", "छोटो"), ("छोटा", "हेड़ो"), ("बड़ा", "बाड़ो"),
    ("अच्छा", "अक्छे"), ("बुरा", "बेड़ो"), ("सुंदर", "रंगा"),
    ("काला", "कारा"), ("सफेद", "पेत"), ("लाल", "लाल"),
    ("हरा", "हरे"), ("नीला", "नील"), ("पीला", "पीला"),
    ("गर्म", "तपा"), ("ठंडा", "सीता"), ("गीला", "भेड़ो"),
    ("सूखा", "सूका"), ("तेज", "तिज"), ("धीमा", "मीना"),
    ("मीठा", "मीठो"), ("कड़वा", "कड़वो"), ("नमकीन", "खारो"),
    ("खट्टा", "खारो"),
];
