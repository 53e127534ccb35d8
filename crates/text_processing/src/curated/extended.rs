//! Extended vocabulary: household, tools, directions, education and civic terms

pub(super) const EXTENDED: &[(&str, &str)] = &[
    ("गाड़ी", "ᱜᱟᱲᱤ"), ("वाहन", "ᱜᱟᱲᱤ"), ("साइकिल", "ᱥᱟᱭᱠᱤᱞ"),
    ("मोटरसाइकिल", "ᱢᱳᱴᱚᱨ ᱥᱟᱭᱠᱤᱞ"), ("ट्रेन", "ᱨᱮᱞ"), ("रेलगाड़ी", "ᱨᱮᱞᱜᱟᱲᱤ"),
    ("बस", "ᱵᱟᱥ"), ("ट्रक", "ᱴᱨᱮᱠ"), ("नाव", "ᱱᱟᱣ"),
    ("जहाज", "ᱡᱟᱦᱟᱡ"), ("हवाई जहाज", "ᱦᱟᱣᱟᱭ ᱡᱟᱦᱟᱡ"), ("हेलिकॉप्टर", "ᱦᱮᱞᱤᱠᱳᱯᱴᱚᱨ"),
    ("स्टेशन", "ᱤᱥᱴᱮᱥᱚᱱ"), ("रेलवे स्टेशन", "ᱨᱮᱞ ᱤᱥᱴᱮᱥᱚᱱ"), ("बस स्टैंड", "ᱵᱟᱥ ᱤᱥᱴᱮᱥᱚᱱ"),

    ("उत्तर", "ᱩᱛᱛᱚᱨ"), ("दक्षिण", "ᱫᱟᱠᱥᱤᱱ"), ("पूर्व", "ᱯᱩᱨᱵ"),
    ("पश्चिम", "ᱯᱟᱥᱪᱤᱢ"), ("दाएं", "ᱫᱟᱦᱤᱱᱮ"), ("दाहिना", "ᱫᱟᱦᱤᱱᱮ"),
    ("बाएं", "ᱵᱟᱭᱮᱫᱤᱥᱚᱢ"), ("बायाँ", "ᱵᱟᱭᱮᱫᱤᱥᱚᱢ"), ("आगे", "ᱟᱜᱮ"),
    ("पीछे", "ᱯᱤᱪᱷᱮ"), ("ऊपर", "ᱩᱯᱚᱨ"), ("नीचे", "ᱱᱤᱪᱮ"),
    ("अंदर", "ᱨᱮ"), ("बाहर", "ᱵᱟᱦᱟ"), ("पास", "ᱯᱟᱥ"),
    ("दूर", "ᱫᱩᱨ"), ("बीच", "ᱤᱫᱤ"), ("के पास", "ᱞᱟᱹᱜᱤᱫ"),
    ("ऊपर से", "ᱩᱯᱚᱨ ᱛᱮ"), ("नीचे से", "ᱱᱤᱪᱮ ᱛᱮ"),

    ("किसान", "ᱠᱤᱥᱟᱱ"), ("मजदूर", "ᱢᱟᱡᱫᱩᱨ"), ("व्यापारी", "ᱵᱟᱯᱟᱨᱤ"),
    ("दुकानदार", "ᱫᱩᱠᱟᱱᱫᱟᱨ"), ("पुलिस", "ᱯᱩᱞᱤᱥ"), ("सिपाही", "ᱥᱤᱯᱟᱦᱤ"),
    ("सैनिक", "ᱥᱮᱱᱟ"), ("डॉक्टर", "ᱰᱟᱠᱛᱚᱨ"), ("वैद्य", "ᱵᱮᱫ"),
    ("बढ़ई", "ᱵᱟᱲᱦᱟᱭ"), ("लोहार", "ᱞᱩᱦᱟᱨ"), ("कुम्हार", "ᱠᱩᱢᱦᱟᱨ"),
    ("मछुआरा", "ᱦᱟᱠᱟᱢ"), ("नाई", "ᱱᱟᱭᱤ"), ("धोबी", "ᱫᱷᱳᱵᱤ"),
    ("पुजारी", "ᱯᱩᱡᱟᱨᱤ"), ("नाइके", "ᱱᱟᱭᱠᱮ"), ("देवता", "ᱵᱳᱸᱜᱟ"),
    ("ओझा", "ᱚᱡᱷᱟ"),

    ("थाली", "ᱛᱷᱟᱞᱤ"), ("लोटा", "ᱞᱳᱴᱟ"), ("बर्तन", "ᱵᱟᱨᱛᱚᱱ"),
    ("हांडी", "ᱦᱟᱸᱰᱤ"), ("चूल्हा", "ᱪᱩᱞᱷᱟ"), ("चिमनी", "ᱪᱤᱢᱱᱤ"),
    ("रस्सी", "ᱡᱚᱛᱚ"), ("टोकरी", "ᱴᱳᱠᱨᱤ"), ("बाल्टी", "ᱵᱟᱞᱴᱤ"),
    ("मटका", "ᱢᱟᱴᱠᱟ"), ("सूप", "ᱥᱩᱯ"), ("ओखली", "ᱚᱠᱷᱞᱤ"),
    ("खाट", "ᱠᱷᱟᱴ"), ("चारपाई", "ᱪᱟᱨᱯᱟᱭ"), ("कंबल", "ᱠᱚᱸᱵᱞ"),
    ("चादर", "ᱪᱟᱫᱚᱨ"), ("तकिया", "ᱛᱟᱠᱤᱭᱟ"), ("दरवाजा", "ᱫᱷᱚᱨᱢᱟ"),
    ("खिड़की", "ᱠᱷᱤᱲᱠᱤ"), ("छत", "ᱪᱷᱟᱦᱟ"), ("दीवार", "ᱫᱤᱣᱟᱨ"),
    ("फर्श", "ᱯᱷᱟᱨᱥ"), ("आँगन", "ᱟᱸᱜᱱᱟ"),

    ("कपड़ा", "ᱠᱟᱯᱲᱟ"), ("कपड़े", "ᱠᱟᱯᱲᱟ"), ("साड़ी", "ᱥᱟᱲᱤ"),
    ("धोती", "ᱫᱷᱚᱛᱤ"), ("कमीज", "ᱠᱟᱢᱤᱡ"), ("पैंट", "ᱯᱟᱸᱴ"),
    ("टोपी", "ᱴᱳᱯᱤ"), ("पगड़ी", "ᱯᱟᱜᱲᱤ"), ("जूता", "ᱡᱩᱛᱟ"),
    ("चप्पल", "ᱪᱚᱯᱚᱞ"), ("दुपट्टा", "ᱫᱩᱯᱟᱴᱴᱟ"), ("अंगूठी", "ᱟᱸᱜᱩᱴᱷᱤ"),
    ("कंगन", "ᱠᱚᱸᱜᱱ"), ("हार", "ᱦᱟᱨ"), ("बाली", "ᱵᱟᱞᱤ"),

    ("कुल्हाड़ी", "ᱠᱩᱞᱦᱟᱲᱤ"), ("तीर", "ᱛᱤᱨ"), ("धनुष", "ᱫᱷᱚᱣ"),
    ("भाला", "ᱵᱷᱟᱞᱟ"), ("कुदाल", "ᱠᱩᱫᱟᱞ"), ("हल", "ᱦᱟᱞ"),
    ("दरांती", "ᱫᱚᱨᱟᱸᱛᱤ"), ("खुरपी", "ᱠᱷᱩᱨᱯᱤ"), ("बैलगाड़ी", "ᱵᱩᱲᱩ ᱜᱟᱲᱤ"),
    ("जाल", "ᱡᱟᱞ"),

    ("फोन", "ᱯᱷᱳᱱ"), ("मोबाइल", "ᱢᱳᱵᱟᱭᱞ"), ("कंप्यूटर", "ᱠᱚᱢᱯᱤᱩᱴᱚᱨ"),
    ("इंटरनेट", "ᱤᱸᱴᱚᱨᱱᱮᱴ"), ("रेडियो", "ᱨᱮᱰᱤᱭᱳ"), ("टीवी", "ᱴᱤᱵᱤ"),
    ("टेलीविजन", "ᱴᱤᱵᱤ"), ("बल्ब", "ᱵᱟᱞᱵ"), ("बिजली का खंभा", "ᱵᱤᱡᱞᱤ ᱠᱷᱟᱢᱵᱟ"),
    ("कैमरा", "ᱠᱮᱢᱨᱟ"), ("घड़ी", "ᱜᱷᱲᱤ"),

    ("नींद", "ᱱᱤᱸᱫ"), ("नींद आना", "ᱱᱤᱸᱫ ᱣᱟᱦ"), ("थकान", "ᱛᱷᱟᱠᱟ"),
    ("कमजोरी", "ᱠᱟᱢᱡᱳᱨᱤ"), ("उल्टी", "ᱩᱞᱴᱤ"), ("चक्कर", "ᱪᱷᱚᱠᱠᱚᱨ"),
    ("खुजली", "ᱠᱷᱩᱡᱞᱤ"), ("सूजन", "ᱥᱩᱡᱚᱱ"), ("जलन", "ᱡᱞᱚᱱ"),
    ("नाक बहना", "ᱱᱳᱠ ᱵᱟᱦ"), ("गठिया", "ᱜᱟᱴᱷᱤᱭᱟ"), ("मलेरिया", "ᱢᱟᱞᱮᱨᱤᱭᱟ"),
    ("टीका", "ᱴᱤᱠᱟ"), ("पट्टी", "ᱯᱟᱴᱴᱤ"), ("खून बहना", "ᱨᱚᱠᱛᱚ ᱵᱟᱦ"),
    ("टूटी हड्डी", "ᱛᱩᱲᱩᱜ ᱦᱟᱰᱤᱠ"),

    ("सर्दी", "ᱥᱟᱸᱜᱮ"), ("गर्मी", "ᱵᱟᱹᱛᱩᱞᱤ"), ("बरसात", "ᱵᱟᱹᱨᱥᱤᱥ"),
    ("मानसून", "ᱵᱟᱹᱨᱥᱤᱥ"), ("वसंत", "ᱵᱟᱦᱟ"), ("पतझड़", "ᱯᱟᱛᱡᱷᱟᱲ"),
    ("कोहरा", "ᱠᱚᱦᱨᱟ"), ("ओस", "ᱳᱥ"), ("कड़ाके की ठंड", "ᱵᱟᱨᱟᱝ ᱴᱷᱟᱸᱰᱟ"),
    ("लू", "ᱞᱩ"), ("भूकंप", "ᱵᱷᱩᱠᱚᱸᱯ"), ("बाढ़", "ᱵᱟᱲ"),
    ("सूखा", "ᱥᱩᱠᱷᱟ"),

    ("साल का पेड़", "ᱥᱟᱞ ᱫᱟᱨᱮ"), ("महुआ", "ᱢᱟᱦᱩᱟ"), ("सखुआ", "ᱥᱟᱠᱚᱣᱟ"),
    ("पलाश", "ᱯᱟᱞᱟᱥ"), ("नीम", "ᱱᱤᱢ"), ("पीपल", "ᱯᱤᱯᱚᱞ"),
    ("बरगद", "ᱵᱚᱨᱜᱚᱫ"), ("आँवला", "ᱟᱸᱣᱞᱟ"), ("सरसों", "ᱥᱚᱨᱥᱚᱸ"),
    ("तिल", "ᱛᱤᱞ"), ("बाँस", "ᱵᱟᱸᱥ"), ("घास", "ᱜᱷᱟᱥ"),
    ("काँटा", "ᱠᱟᱸᱴᱟ"), ("जड़ी-बूटी", "ᱡᱨᱤ ᱵᱩᱴᱤ"),

    ("सरहुल", "ᱥᱟᱨᱦᱩᱞ"), ("बाहा", "ᱵᱟᱦᱟ"), ("करम", "ᱠᱟᱨᱟᱢ"),
    ("सोहराय", "ᱥᱳᱦᱨᱟᱭ"), ("माघ", "ᱢᱟᱜ"), ("जानी शिकार", "ᱡᱟᱱᱤ ᱥᱤᱠᱟᱨ"),
    ("मांदर", "ᱢᱟᱸᱫᱟᱨ"), ("नगाड़ा", "ᱱᱟᱜᱟᱲᱟ"), ("बाँसुरी", "ᱵᱟᱸᱥᱩᱲᱤ"),
    ("ढोल", "ᱫᱷᱚᱞ"), ("सरना", "ᱥᱟᱨᱱᱟ"), ("जाहेर", "ᱡᱟᱦᱮᱨ"),
    ("देवताओं", "ᱵᱳᱸᱜᱟ ᱠᱚ"), ("माँझी", "ᱢᱟᱸᱡᱷᱤ"), ("परगनैत", "ᱯᱟᱨᱜᱚᱱᱟᱭᱛ"),
    ("गोडेट", "ᱜᱚᱰᱮᱛ"), ("मुर्मू", "ᱢᱩᱨᱢᱩ"), ("सोरेन", "ᱥᱳᱨᱮᱱ"),
    ("हेम्ब्रम", "ᱦᱮᱢᱵᱨᱚᱢ"), ("किस्कू", "ᱠᱤᱥᱠᱩ"), ("टुडू", "ᱴᱩᱰᱩ"),
    ("बेसरा", "ᱵᱮᱥᱨᱟ"), ("पारधान", "ᱯᱟᱨᱫᱦᱟᱱ"),

    ("और", "ᱟᱨ"), ("या", "ᱣᱟ"), ("लेकिन", "ᱮᱦᱮᱫ"),
    ("क्योंकि", "ᱨᱮᱴᱮ ᱠᱟᱛᱮ"), ("इसलिए", "ᱤᱥᱞᱤᱮ"), ("अगर", "ᱟᱜᱚᱨ"),
    ("तो", "ᱛᱟᱦᱮᱸᱱ"), ("जब", "ᱡᱵ"), ("तब", "ᱛᱵ"),
    ("जहाँ", "ᱡᱟᱦᱟᱸ"), ("जैसे", "ᱞᱮᱠᱟ"), ("बहुत ज्यादा", "ᱵᱟᱨᱟᱝ ᱵᱷᱟᱨᱤ"),
    ("थोड़ा सा", "ᱛᱷᱳᱲᱟ"), ("सब", "ᱥᱚᱵ"), ("सभी", "ᱥᱚᱵ"),
    ("कुछ", "ᱠᱩᱱᱩ"), ("कोई", "ᱠᱳᱱᱚ"), ("हर", "ᱦᱚᱨ"),
    ("हर एक", "ᱦᱚᱨ ᱢᱤᱫ"), ("के साथ", "ᱟᱜ ᱥᱟᱛᱷᱮ"), ("के लिए", "ᱞᱟᱹᱜᱤᱫ"),
    ("में", "ᱨᱮ"), ("से", "ᱛᱮ"), ("पर", "ᱨᱮ"),
    ("को", "ᱠᱮ"), ("का", "ᱟᱜ"), ("की", "ᱟᱜ"),
    ("के", "ᱟᱜ"), ("है", "ᱠᱟᱱᱟ"), ("हैं", "ᱠᱟᱱᱟ"),
    ("था", "ᱚᱫᱚ"), ("थी", "ᱚᱫᱚ"), ("होगा", "ᱦᱚᱭᱚᱜ"),
    ("होगी", "ᱦᱚᱭᱚᱜ"),

    ("तुम्हारा नाम क्या है", "ᱟᱢᱟᱜ ᱥᱮᱫᱟᱭ ᱠᱤ ᱠᱟᱱᱟ"), ("मेरा नाम है", "ᱤᱧᱟᱜ ᱥᱮᱫᱟᱭ ᱠᱟᱱᱟ"), ("कहाँ से आए", "ᱠᱳᱣᱟ ᱛᱮ ᱚᱜᱮᱫ"),
    ("क्या चाहिए", "ᱠᱤ ᱫᱟᱨᱠᱟᱨ"), ("कितना दाम है", "ᱠᱮᱫ ᱫᱟᱢ ᱠᱟᱱᱟ"), ("मुझे नहीं पता", "ᱤᱧᱠᱮ ᱵᱟᱝ ᱡᱟᱱᱟᱢ"),
    ("समझ नहीं आया", "ᱵᱩᱡᱷᱩ ᱵᱟᱝ ᱞᱟᱜᱮᱡ"), ("फिर कहो", "ᱡᱟᱦᱟᱸ ᱵᱚᱞ"), ("धीरे बोलो", "ᱛᱤᱥᱟ ᱵᱚᱞ"),
    ("यह सच है", "ᱱᱩᱱᱩ ᱥᱟᱫᱦᱚᱱ ᱠᱟᱱᱟ"), ("मदद करो", "ᱢᱫᱚᱫ ᱮᱢ"), ("शुभकामनाएं", "ᱡᱚᱛᱚ ᱛᱷᱟᱱ"),

    ("आधा", "ᱟᱰᱷᱟ"), ("चौथाई", "ᱪᱚᱛᱷᱟᱭᱤ"), ("दुगना", "ᱫᱩᱜᱩᱩᱱᱟ"),
    ("तिगुना", "ᱛᱤᱜᱩᱱᱟ"), ("पहला", "ᱯᱷᱮᱞᱟ"), ("दूसरा", "ᱫᱩᱥᱨᱟ"),
    ("तीसरा", "ᱯᱮ ᱱᱚᱵᱚᱨ"), ("अंतिम", "ᱟᱠᱷᱤᱨ"), ("पिछला", "ᱯᱤᱪᱷᱞᱟ"),

    ("किलो", "ᱠᱤᱞᱳ"), ("ग्राम", "ᱜᱨᱟᱢ"), ("लीटर", "ᱞᱤᱴᱚᱨ"),
    ("मीटर", "ᱢᱤᱴᱚᱨ"), ("किलोमीटर", "ᱠᱤᱞᱳᱢᱤᱴᱚᱨ"), ("सेंटीमीटर", "ᱥᱮᱸᱴᱤᱢᱤᱴᱚᱨ"),
    ("एकड़", "ᱤᱠᱲ"), ("बीघा", "ᱵᱤᱜᱷᱟ"),

    ("गणित", "ᱜᱚᱱᱤᱛ"), ("विज्ञान", "ᱵᱤᱡ᱒ᱟᱱ"), ("इतिहास", "ᱤᱛᱤᱦᱟᱥ"),
    ("भूगोल", "ᱵᱷᱩᱜᱳᱞ"), ("हिंदी", "ᱦᱤᱸᱫᱤ"), ("अंग्रेजी", "ᱤᱸᱨᱮᱡ"),
    ("संताली", "ᱥᱟᱱᱛᱟᱞᱤ"), ("उर्दू", "ᱩᱨᱫᱩ"), ("कक्षा", "ᱠᱞᱟᱥ"),
    ("पाठ", "ᱯᱟᱴᱷ"), ("प्रश्न", "ᱯᱨᱚᱥᱪᱱ"), ("फेल", "ᱯᱷᱮᱞ"),
    ("पुरस्कार", "ᱯᱩᱨᱚᱥᱠᱟᱨ"), ("प्रमाण पत्र", "ᱯᱨᱚᱢᱟᱱ ᱯᱚᱛᱨ"),
];
