//! General vocabulary: greetings, family, body, nature, food, verbs, numbers

pub(super) const GENERAL: &[(&str, &str)] = &[
    ("नमस्ते", "ᱡᱚᱦᱟᱨ"), ("नमस्कार", "ᱡᱚᱦᱟᱨ"), ("जोहार", "ᱡᱚᱦᱟᱨ"),
    ("धन्यवाद", "ᱥᱟᱱᱟᱢ"), ("शुक्रिया", "ᱥᱟᱱᱟᱢ"), ("आभार", "ᱥᱟᱱᱟᱢ"),
    ("हाँ", "ᱦᱚᱸ"), ("जी", "ᱦᱚᱸ"), ("जी हाँ", "ᱦᱚᱸ"),
    ("नहीं", "ᱵᱟᱝ"), ("नही", "ᱵᱟᱝ"), ("ना", "ᱵᱟᱝ"),
    ("कृपया", "ᱠᱨᱤᱯᱟ"), ("माफ करें", "ᱢᱟᱯᱷ ᱮᱢ"), ("माफ करो", "ᱢᱟᱯᱷ ᱮᱢ"),
    ("अलविदा", "ᱡᱚᱦᱟᱨ"), ("शुभ रात्रि", "ᱨᱟᱹᱛᱤ ᱡᱚᱦᱟᱨ"), ("क्या हाल है", "ᱠᱤᱫ ᱛᱟᱦᱮᱸᱱ"),
    ("ठीक हूँ", "ᱡᱚᱛᱚ ᱠᱟᱱᱟᱢ"), ("ठीक है", "ᱡᱚᱛᱚ ᱠᱟᱱᱟ"), ("ठीक", "ᱡᱚᱛᱚ"),
    ("बहुत अच्छा", "ᱵᱟᱨᱟᱝ ᱡᱚᱛᱚ"), ("बहुत", "ᱵᱟᱨᱟᱝ"), ("थोड़ा", "ᱛᱷᱳᱲᱟ"),

    ("मैं", "ᱤᱧ"), ("हम", "ᱟᱞᱮ"), ("हमलोग", "ᱟᱞᱮ"),
    ("तुम", "ᱟᱢ"), ("आप", "ᱟᱯᱮ"), ("तू", "ᱟᱢ"),
    ("वह", "ᱩᱱᱤ"), ("वो", "ᱩᱱᱤ"), ("यह", "ᱱᱩᱱᱩ"),
    ("ये", "ᱱᱩᱱᱩ"), ("वे", "ᱩᱱᱠᱚ"), ("उनलोग", "ᱩᱱᱠᱚ"),
    ("मेरा", "ᱟᱢᱟᱜ"), ("मेरी", "ᱟᱢᱟᱜ"), ("मुझे", "ᱤᱧᱠᱮ"),
    ("मुझको", "ᱤᱧᱠᱮ"), ("तुम्हारा", "ᱟᱢᱟᱜ"), ("हमारा", "ᱟᱞᱮᱟᱜ"),
    ("उनका", "ᱩᱱᱟᱜ"), ("क्या", "ᱠᱤ"), ("कौन", "ᱠᱳᱱ"),
    ("कहाँ", "ᱠᱳᱣᱟ"), ("कब", "ᱠᱤᱫ"), ("क्यों", "ᱨᱮᱴᱮ"),
    ("कैसे", "ᱠᱤᱱ"), ("कितना", "ᱠᱮᱫ"), ("यहाँ", "ᱱᱳᱣᱟ"),
    ("वहाँ", "ᱩᱱᱤ ᱞᱟᱹᱜᱤᱫ"), ("किधर", "ᱠᱳᱣᱟ"),

    ("शून्य", "ᱥᱩᱱᱩᱢ"), ("एक", "ᱢᱤᱫ"), ("दो", "ᱵᱟᱨ"),
    ("तीन", "ᱯᱮ"), ("चार", "ᱯᱩᱱ"), ("पाँच", "ᱢᱚᱬᱮ"),
    ("छह", "ᱛᱩᱨᱩᱭ"), ("सात", "ᱮᱭᱟᱭ"), ("आठ", "ᱤᱨᱠᱟᱞ"),
    ("नौ", "ᱟᱨᱮ"), ("दस", "ᱜᱮᱞ"), ("ग्यारह", "ᱜᱮᱞ ᱢᱤᱫ"),
    ("बारह", "ᱜᱮᱞ ᱵᱟᱨ"), ("तेरह", "ᱜᱮᱞ ᱯᱮ"), ("चौदह", "ᱜᱮᱞ ᱯᱩᱱ"),
    ("पंद्रह", "ᱜᱮᱞ ᱢᱚᱬᱮ"), ("सोलह", "ᱜᱮᱞ ᱛᱩᱨᱩᱭ"), ("सत्रह", "ᱜᱮᱞ ᱮᱭᱟᱭ"),
    ("अठारह", "ᱜᱮᱞ ᱤᱨᱠᱟᱞ"), ("उन्नीस", "ᱜᱮᱞ ᱟᱨᱮ"), ("बीस", "ᱤᱥᱤ"),
    ("तीस", "ᱯᱮ ᱤᱥᱤ"), ("चालीस", "ᱯᱩᱱ ᱤᱥᱤ"), ("पचास", "ᱢᱚᱬᱮ ᱤᱥᱤ"),
    ("साठ", "ᱛᱩᱨᱩᱭ ᱤᱥᱤ"), ("सत्तर", "ᱮᱭᱟᱭ ᱤᱥᱤ"), ("अस्सी", "ᱤᱨᱠᱟᱞ ᱤᱥᱤ"),
    ("नब्बे", "ᱟᱨᱮ ᱤᱥᱤ"), ("सौ", "ᱥᱟᱭ"), ("हजार", "ᱦᱟᱡᱟᱨ"),
    ("लाख", "ᱞᱟᱠ"),

    ("आज", "ᱮᱴᱟᱜ"), ("कल", "ᱦᱟᱹᱴᱤᱧ"), ("परसों", "ᱯᱷᱚᱨᱥᱚᱸ"),
    ("सुबह", "ᱵᱟᱹᱱᱩᱜ"), ("दोपहर", "ᱫᱳᱯᱷᱮᱨ"), ("शाम", "ᱥᱟᱸᱡ"),
    ("रात", "ᱨᱟᱹᱛᱤ"), ("अभी", "ᱟᱵᱷᱤ"), ("जल्दी", "ᱡᱟᱞᱫᱤ"),
    ("देर", "ᱫᱮᱨ"), ("हमेशा", "ᱦᱟᱢᱮᱥᱟ"), ("कभी", "ᱠᱵᱷᱤ"),
    ("पहले", "ᱯᱷᱮᱞᱟ"), ("बाद में", "ᱵᱟᱫ ᱨᱮ"), ("दिन", "ᱫᱤᱱ"),
    ("घंटा", "ᱜᱷᱚᱸᱴᱟ"), ("मिनट", "ᱢᱤᱱᱤᱴ"), ("हफ्ता", "ᱦᱟᱯᱛᱟ"),
    ("सप्ताह", "ᱦᱟᱯᱛᱟ"), ("महीना", "ᱪᱮᱫ"), ("माह", "ᱪᱮᱫ"),
    ("साल", "ᱥᱮᱨᱢᱟ"), ("वर्ष", "ᱥᱮᱨᱢᱟ"), ("सोमवार", "ᱥᱳᱢᱵᱟᱨ"),
    ("मंगलवार", "ᱢᱚᱸᱜᱞᱵᱟᱨ"), ("बुधवार", "ᱵᱩᱫᱵᱟᱨ"), ("गुरुवार", "ᱜᱩᱨᱩᱵᱟᱨ"),
    ("शुक्रवार", "ᱥᱩᱠᱨᱩᱵᱟᱨ"), ("शनिवार", "ᱥᱟᱱᱤᱵᱟᱨ"), ("रविवार", "ᱨᱟᱵᱤᱵᱟᱨ"),

    ("लाल", "ᱥᱮᱫ"), ("नीला", "ᱱᱤᱞ"), ("हरा", "ᱦᱟᱹᱲᱤᱧ"),
    ("सफेद", "ᱦᱮᱸᱫᱮ"), ("काला", "ᱠᱟᱞᱚ"), ("पीला", "ᱯᱤᱞᱟ"),
    ("नारंगी", "ᱱᱟᱨᱚᱸᱜᱤ"), ("गुलाबी", "ᱜᱩᱞᱟᱵᱤ"), ("भूरा", "ᱵᱷᱩᱨᱩ"),
    ("बैंगनी", "ᱵᱮᱸᱜᱱᱤ"), ("सुनहरा", "ᱥᱩᱱᱟᱹ"),

    ("अच्छा", "ᱡᱚᱛᱚ"), ("बुरा", "ᱢᱚᱱᱮ"), ("बड़ा", "ᱵᱟᱲᱟᱭ"),
    ("छोटा", "ᱦᱮᱲᱚ"), ("नया", "ᱱᱟᱶᱟ"), ("पुराना", "ᱡᱩᱬᱤ"),
    ("सुंदर", "ᱨᱩᱯᱟᱹ"), ("गर्म", "ᱜᱟᱨᱢ"), ("ठंडा", "ᱴᱷᱟᱸᱰᱟ"),
    ("ठंड", "ᱴᱷᱟᱸᱰᱟ"), ("लंबा", "ᱞᱚᱸᱵᱟ"), ("भारी", "ᱵᱷᱟᱨᱤ"),
    ("हल्का", "ᱦᱟᱞᱠᱟ"), ("तेज", "ᱛᱮᱡ"), ("धीमा", "ᱛᱤᱥᱟ"),
    ("साफ", "ᱥᱟᱯᱷ"), ("गंदा", "ᱜᱩᱸᱰᱤ"), ("कठिन", "ᱠᱟᱴᱷᱤᱱ"),
    ("आसान", "ᱟᱥᱟᱱ"), ("सरल", "ᱟᱥᱟᱱ"), ("मीठा", "ᱢᱤᱴᱷᱟ"),
    ("कड़वा", "ᱠᱟᱲᱣᱟ"), ("खट्टा", "ᱠᱷᱟᱴᱟ"), ("नमकीन", "ᱱᱩᱱᱤᱭᱟ"),
    ("पक्का", "ᱯᱚᱠᱠᱟ"), ("कच्चा", "ᱠᱟᱪᱪᱟ"), ("ऊँचा", "ᱩᱪᱩᱸ"),
    ("नीचा", "ᱱᱤᱪᱩ"), ("गहरा", "ᱜᱮᱦᱨᱟ"), ("खुश", "ᱥᱟᱦᱟᱜ"),
    ("खुशी", "ᱥᱟᱦᱟᱜ"), ("प्रसन्न", "ᱥᱟᱦᱟᱜ"), ("दुख", "ᱫᱩᱠ᱒"),
    ("दुखी", "ᱫᱩᱠᱤ᱒"), ("उदास", "ᱫᱩᱠᱤ᱒"), ("डरा", "ᱫᱮᱨ"),
    ("डर", "ᱫᱮᱨ"), ("गुस्सा", "ᱜᱩᱥᱥᱟ"), ("शांत", "ᱥᱟᱸᱛᱤ"),
    ("थका", "ᱛᱷᱟᱠᱟ"), ("थका हुआ", "ᱛᱷᱟᱠᱟ"), ("भूखा", "ᱵᱷᱩᱠ"),
    ("प्यासा", "ᱤᱯᱤᱭ"), ("बीमार", "ᱵᱮᱢᱟᱨ"), ("स्वस्थ", "ᱥᱮᱦᱮᱛ"),
    ("अमीर", "ᱟᱢᱤᱨ"), ("गरीब", "ᱜᱨᱤᱵ"),

    ("सिर", "ᱢᱟᱦᱟ"), ("बाल", "ᱵᱟᱞ"), ("आँख", "ᱪᱳᱠᱷᱩ"),
    ("आंख", "ᱪᱳᱠᱷᱩ"), ("कान", "ᱠᱟᱱ"), ("नाक", "ᱱᱳᱠ"),
    ("मुँह", "ᱢᱩᱸᱦᱩ"), ("मुंह", "ᱢᱩᱸᱦᱩ"), ("दाँत", "ᱫᱟᱸᱛ"),
    ("जीभ", "ᱡᱤᱵ"), ("होंठ", "ᱵᱷᱩᱴᱩᱨ"), ("गर्दन", "ᱜᱚᱨᱫᱚᱱ"),
    ("कंधा", "ᱠᱚᱸᱫᱷᱟ"), ("हाथ", "ᱦᱟᱹᱛᱤ"), ("उँगली", "ᱩᱸᱜᱞᱤ"),
    ("नाखून", "ᱱᱟᱠᱷᱩᱱ"), ("पीठ", "ᱯᱤᱴᱷ"), ("छाती", "ᱪᱷᱟᱛᱤ"),
    ("पेट", "ᱯᱮᱴ"), ("पैर", "ᱯᱟᱭᱨ"), ("घुटना", "ᱜᱷᱩᱴᱱᱟ"),
    ("हृदय", "ᱫᱤᱞ"), ("दिल", "ᱫᱤᱞ"), ("रक्त", "ᱨᱚᱠᱛᱚ"),
    ("खून", "ᱨᱚᱠᱛᱚ"), ("हड्डी", "ᱦᱟᱰᱤᱠ"), ("चमड़ी", "ᱪᱟᱢᱲᱟ"),

    ("माँ", "ᱟᱭᱩ"), ("माता", "ᱟᱭᱩ"), ("अम्मा", "ᱟᱭᱩ"),
    ("मम्मी", "ᱟᱭᱩ"), ("बाप", "ᱵᱟᱵᱟ"), ("पिता", "ᱵᱟᱵᱟ"),
    ("पापा", "ᱵᱟᱵᱟ"), ("भाई", "ᱵᱟᱭᱚ"), ("बहन", "ᱵᱷᱟᱣᱤ"),
    ("दादा", "ᱫᱟᱫᱟ"), ("दादी", "ᱫᱟᱫᱤ"), ("नाना", "ᱢᱟᱢᱟ"),
    ("नानी", "ᱢᱟᱢᱤ"), ("चाचा", "ᱪᱟᱪᱟ"), ("चाची", "ᱪᱟᱪᱤ"),
    ("मामा", "ᱢᱟᱢᱟ"), ("मामी", "ᱢᱟᱢᱤ"), ("बेटा", "ᱦᱚᱲ ᱦᱚᱴᱮ"),
    ("बेटी", "ᱮᱞ ᱦᱚᱴᱮ"), ("पति", "ᱵᱟᱱᱩᱜᱟ"), ("पत्नी", "ᱡᱚᱜᱦᱟᱭ"),
    ("परिवार", "ᱜᱩᱴᱤ"), ("बच्चा", "ᱦᱚᱴᱮ"), ("बच्चे", "ᱦᱚᱴᱮ ᱠᱚ"),

    ("खाना", "ᱡᱟᱹᱶᱤ"), ("भोजन", "ᱡᱟᱹᱶᱤ"), ("खाना खाना", "ᱡᱚᱢ"),
    ("चावल", "ᱪᱟᱣᱞ"), ("रोटी", "ᱨᱚᱴᱤ"), ("दाल", "ᱫᱟᱞ"),
    ("दूध", "ᱫᱩᱫ"), ("दही", "ᱫᱚᱦᱤ"), ("घी", "ᱜᱷᱤ"),
    ("मक्खन", "ᱢᱟᱠᱷᱟᱱ"), ("चाय", "ᱪᱟ"), ("पानी", "ᱫᱟᱜ"),
    ("जल", "ᱫᱟᱜ"), ("नमक", "ᱱᱩᱱ"), ("चीनी", "ᱪᱤᱱᱤ"),
    ("तेल", "ᱛᱮᱞ"), ("गुड़", "ᱜᱩᱲ"), ("सब्जी", "ᱥᱟᱠᱟᱢ"),
    ("साग", "ᱥᱟᱠᱟᱢ"), ("आम", "ᱟᱢᱵᱟ"), ("केला", "ᱠᱮᱞᱟ"),
    ("सेब", "ᱥᱮᱵ"), ("जामुन", "ᱡᱟᱢᱩᱱ"), ("अमरूद", "ᱟᱢᱨᱩᱫ"),
    ("पपीता", "ᱯᱟᱯᱤᱛᱟ"), ("आलू", "ᱟᱞᱩ"), ("प्याज", "ᱯᱤᱭᱟᱡ"),
    ("टमाटर", "ᱴᱚᱢᱟᱴᱚ"), ("बैंगन", "ᱵᱮᱸᱜᱮᱱ"), ("कद्दू", "ᱠᱩᱫᱩ"),
    ("मूली", "ᱢᱩᱞᱤ"), ("मछली", "ᱦᱟᱠ"), ("मांस", "ᱢᱟᱸᱥ"),
    ("अंडा", "ᱩᱠᱩ ᱞᱩᱛᱩᱨ"), ("मुर्गी का मांस", "ᱩᱠᱩ ᱢᱟᱸᱥ"),

    ("पहाड़", "ᱵᱩᱨᱩ"), ("पहाड़ी", "ᱵᱩᱨᱩ"), ("नदी", "ᱩᱞ"),
    ("झरना", "ᱡᱷᱟᱨᱱᱟ"), ("तालाब", "ᱛᱟᱞᱟᱵ"), ("समुद्र", "ᱥᱟᱢᱩᱫᱨᱚ"),
    ("झील", "ᱡᱷᱤᱞ"), ("कुआँ", "ᱠᱩᱣᱟᱸ"), ("जंगल", "ᱵᱤᱨ"),
    ("मैदान", "ᱢᱮᱫᱟᱱ"), ("खेत", "ᱠᱷᱮᱛ"), ("पेड़", "ᱫᱟᱨᱮ"),
    ("पौधा", "ᱯᱟᱣᱫᱷᱟ"), ("पेड़-पौधे", "ᱫᱟᱨᱮ ᱯᱟᱣᱫᱷᱟ"), ("फूल", "ᱯᱷᱩᱞ"),
    ("पत्ता", "ᱯᱟᱹᱛᱤ"), ("पत्ते", "ᱯᱟᱹᱛᱤ"), ("घास", "ᱜᱷᱟᱥ"),
    ("बीज", "ᱵᱤᱡ"), ("जड़", "ᱡᱨᱚ"), ("आकाश", "ᱟᱠᱟᱥ"),
    ("आसमान", "ᱟᱠᱟᱥ"), ("सूरज", "ᱥᱤᱧ"), ("सूर्य", "ᱥᱤᱧ"),
    ("चाँद", "ᱪᱟᱸᱫᱚ"), ("चंद्रमा", "ᱪᱟᱸᱫᱚ"), ("तारा", "ᱤᱮᱨ"),
    ("तारे", "ᱤᱮᱨ"), ("बादल", "ᱵᱟᱫᱟᱞ"), ("बारिश", "ᱵᱟᱹᱨᱥᱤᱥ"),
    ("वर्षा", "ᱵᱟᱹᱨᱥᱤᱥ"), ("बर्फ", "ᱵᱨᱷᱚᱯ"), ("तूफान", "ᱴᱩᱯᱷᱟᱱ"),
    ("बिजली", "ᱵᱤᱡᱞᱤ"), ("हवा", "ᱥᱟᱭᱚᱱ"), ("वायु", "ᱥᱟᱭᱚᱱ"),
    ("आग", "ᱚᱜᱚᱱ"), ("धुआँ", "ᱫᱷᱩᱣᱟᱸ"), ("मिट्टी", "ᱢᱤᱴᱤ"),
    ("रेत", "ᱨᱮᱛ"), ("पत्थर", "ᱯᱟᱹᱛᱭᱟᱨ"), ("धूप", "ᱥᱤᱧ ᱪᱟᱠᱟ"),
    ("छाया", "ᱪᱦᱟᱭᱟ"), ("अंधेरा", "ᱮᱸᱫᱮ"), ("रोशनी", "ᱣᱟᱜ"),
    ("उजाला", "ᱣᱟᱜ"),

    ("कुत्ता", "ᱦᱩᱲᱩ"), ("कुत्ते", "ᱦᱩᱲᱩ"), ("कुतिया", "ᱦᱩᱲᱩ"),
    ("बिल्ली", "ᱢᱮᱦᱮᱜ"), ("गाय", "ᱜᱟᱭ"), ("बैल", "ᱵᱩᱲᱩ"),
    ("भैंस", "ᱵᱷᱮᱸᱥ"), ("घोड़ा", "ᱜᱷᱳᱲᱟ"), ("हाथी", "ᱦᱟᱛᱷᱤ"),
    ("ऊँट", "ᱚᱸᱴ"), ("शेर", "ᱥᱟᱹᱨᱡᱚᱢ"), ("बाघ", "ᱵᱟᱜ"),
    ("चीता", "ᱪᱤᱛᱟ"), ("भालू", "ᱵᱷᱟᱞᱩ"), ("हिरण", "ᱦᱤᱨᱷᱤᱧ"),
    ("बंदर", "ᱵᱚᱸᱫᱚᱨ"), ("साँप", "ᱵᱤᱝ"), ("मगरमच्छ", "ᱢᱟᱜᱨᱚ"),
    ("मेंढक", "ᱢᱟᱸᱲᱟᱝ"), ("पक्षी", "ᱪᱤᱬᱤ"), ("चिड़िया", "ᱪᱤᱬᱤ"),
    ("मुर्गी", "ᱩᱠᱩ"), ("मुर्गा", "ᱩᱠᱩ"), ("बकरी", "ᱢᱮᱱᱫ"),
    ("बकरा", "ᱢᱮᱱᱫ"), ("भेड़", "ᱵᱷᱮᱲ"), ("सूअर", "ᱥᱩᱠᱨᱤ"),
    ("खरगोश", "ᱠᱷᱟᱨᱜᱳᱥ"), ("चूहा", "ᱪᱩᱦᱩ"), ("तोता", "ᱛᱳᱛᱟ"),
    ("कौआ", "ᱠᱟᱣᱟ"), ("कबूतर", "ᱦᱩ"), ("मधुमक्खी", "ᱢᱟᱹᱴᱟᱸ"),
    ("चींटी", "ᱪᱤᱸᱴᱤ"), ("तितली", "ᱛᱤᱛᱞᱤ"),

    ("घर", "ᱜᱷᱚᱨ"), ("घर में", "ᱜᱷᱚᱨ ᱨᱮ"), ("गाँव", "ᱠᱷᱩᱴ"),
    ("गांव", "ᱠᱷᱩᱴ"), ("शहर", "ᱥᱟᱦᱟᱨ"), ("कस्बा", "ᱠᱩᱥᱵᱟ"),
    ("बाजार", "ᱦᱟᱴ"), ("हाट", "ᱦᱟᱴ"), ("दुकान", "ᱫᱩᱠᱟᱱ"),
    ("स्कूल", "ᱤᱥᱠᱩᱞ"), ("विद्यालय", "ᱤᱥᱠᱩᱞ"), ("अस्पताल", "ᱟᱥᱯᱟᱛᱟᱞ"),
    ("दवाखाना", "ᱫᱟᱣᱟᱭ ᱜᱷᱚᱨ"), ("मंदिर", "ᱢᱟᱸᱫᱤᱨ"), ("मस्जिद", "ᱢᱟᱥᱡᱤᱫ"),
    ("चर्च", "ᱪᱟᱨᱪ"), ("बगीचा", "ᱵᱟᱜᱤᱪᱟ"), ("सड़क", "ᱥᱟᱲᱟᱠ"),
    ("रास्ता", "ᱫᱟᱦᱟᱨ"), ("पुल", "ᱯᱩᱞ"), ("नल", "ᱱᱟᱞ"),
    ("जेल", "ᱡᱮᱞ"), ("थाना", "ᱛᱷᱟᱱᱟ"), ("कचहरी", "ᱠᱟᱪᱟᱦᱨᱤ"),
    ("भारत", "ᱵᱷᱟᱨᱚᱛ"), ("झारखंड", "ᱡᱷᱟᱨᱠᱷᱚᱸᱰ"), ("ओड़िशा", "ᱳᱰᱤᱥᱟ"),
    ("पश्चिम बंगाल", "ᱯᱚᱥᱪᱤᱢ ᱵᱚᱸᱜᱟᱞ"), ("असम", "ᱟᱥᱟᱢ"),

    ("पढ़ना", "ᱯᱟᱲᱦᱟᱣ"), ("पढ़ाई", "ᱯᱟᱲᱦᱟᱣ"), ("लिखना", "ᱞᱤᱠᱷᱟᱣ"),
    ("किताब", "ᱯᱳᱛᱳᱵ"), ("पुस्तक", "ᱯᱳᱛᱳᱵ"), ("कापी", "ᱠᱟᱯᱤ"),
    ("कॉपी", "ᱠᱟᱯᱤ"), ("कलम", "ᱠᱟᱞᱟᱢ"), ("पेंसिल", "ᱯᱮᱱᱥᱤᱞ"),
    ("बोर्ड", "ᱵᱳᱨᱰ"), ("अध्यापक", "ᱜᱩᱨᱩ"), ("शिक्षक", "ᱜᱩᱨᱩ"),
    ("मास्टर", "ᱜᱩᱨᱩ"), ("छात्र", "ᱪᱮᱞᱟ"), ("विद्यार्थी", "ᱪᱮᱞᱟ"),
    ("परीक्षा", "ᱯᱮᱨᱤᱠᱥᱟ"), ("क्लास", "ᱠᱞᱟᱥ"), ("गृहकार्य", "ᱜᱷᱚᱨ ᱠᱟᱢᱤ"),
    ("होमवर्क", "ᱜᱷᱚᱨ ᱠᱟᱢᱤ"), ("ज्ञान", "ᱡᱟᱱᱟᱢ"), ("सीखना", "ᱥᱤᱠᱷᱱᱟ"),

    ("स्वास्थ्य", "ᱥᱮᱦᱮᱛ"), ("बीमारी", "ᱵᱮᱢᱟᱨᱤ"), ("दवाई", "ᱫᱟᱣᱟᱭ"),
    ("दवा", "ᱫᱟᱣᱟᱭ"), ("डॉक्टर", "ᱰᱟᱠᱛᱚᱨ"), ("नर्स", "ᱱᱚᱨᱥ"),
    ("बुखार", "ᱡᱩᱨᱟ"), ("खाँसी", "ᱠᱷᱟᱸᱥᱤ"), ("जुकाम", "ᱡᱩᱠᱟᱢ"),
    ("दर्द", "ᱫᱚᱨᱫ"), ("पेट दर्द", "ᱯᱮᱴ ᱫᱚᱨᱫ"), ("चोट", "ᱪᱚᱴ"),
    ("घाव", "ᱜᱷᱟᱣ"), ("ऑपरेशन", "ᱚᱯᱨᱮᱥᱚᱱ"), ("इंजेक्शन", "ᱤᱸᱡᱮᱠᱥᱚᱱ"),

    ("खेती", "ᱪᱟᱥᱤ"), ("हल", "ᱦᱟᱞ"), ("फसल", "ᱯᱷᱚᱥᱚᱞ"),
    ("धान", "ᱫᱟᱠᱟ"), ("मक्का", "ᱢᱟᱠᱠᱟ"), ("गेहूँ", "ᱜᱮᱦᱩᱸ"),
    ("सरसों", "ᱥᱚᱨᱥᱚᱸ"), ("मसूर", "ᱢᱟᱥᱩᱨ"), ("मूंग", "ᱢᱩᱸᱜ"),
    ("कुदाल", "ᱠᱩᱫᱟᱞ"), ("दरांती", "ᱫᱚᱨᱟᱸᱛᱤ"), ("कुल्हाड़ी", "ᱠᱩᱞᱦᱟᱲᱤ"),
    ("सिंचाई", "ᱥᱤᱸᱪᱟᱭ"), ("खाद", "ᱠᱷᱟᱫ"), ("बुआई", "ᱵᱩᱣᱟᱭ"),
    ("कटाई", "ᱠᱟᱴᱟᱭ"), ("खाना (क्रिया)", "ᱡᱚᱢ"), ("पीना", "ᱯᱤ"),
    ("पकाना", "ᱯᱟᱠᱟᱭ"), ("देखना", "ᱱᱮᱞ"), ("सुनना", "ᱥᱩᱱᱩᱢ"),
    ("बोलना", "ᱵᱚᱞ"), ("चलना", "ᱦᱩᱭ"), ("दौड़ना", "ᱫᱟᱹᱲᱤ"),
    ("बैठना", "ᱵᱟᱭ"), ("सोना", "ᱥᱳᱜ"), ("जागना", "ᱡᱟᱜ"),
    ("उठना", "ᱩᱴᱟᱹᱣ"), ("आना", "ᱚᱜ"), ("जाना", "ᱡᱟᱦ"),
    ("रहना", "ᱨᱟᱦ"), ("देना", "ᱫᱮᱱ"), ("लेना", "ᱞᱮᱱ"),
    ("मिलना", "ᱢᱤᱞᱚᱜ"), ("करना", "ᱠᱟᱢᱤ"), ("होना", "ᱦᱚᱭ"),
    ("खेलना", "ᱠᱷᱮᱞ"), ("काम करना", "ᱠᱟᱢᱤ"), ("खरीदना", "ᱠᱤᱱᱟᱹ"),
    ("बेचना", "ᱵᱮᱪᱚᱜ"), ("बताना", "ᱵᱟᱛᱟᱣ"), ("पूछना", "ᱚᱱᱚᱢ"),
    ("हँसना", "ᱦᱟᱸᱥᱟᱭ"), ("रोना", "ᱨᱳᱣ"), ("सोचना", "ᱥᱳᱪᱟᱭ"),
    ("याद करना", "ᱡᱟᱫ ᱠᱟᱢᱤ"), ("समझना", "ᱵᱩᱡᱷᱟᱹᱣ"), ("जानना", "ᱡᱟᱱᱟᱢ"),
    ("मदद करना", "ᱢᱫᱚᱫ"), ("प्यार करना", "ᱞᱮᱵᱮ"), ("बुलाना", "ᱦᱟᱴᱤᱧ"),
    ("भेजना", "ᱵᱷᱮᱡᱟ"), ("खोलना", "ᱩᱜᱟᱹᱭ"), ("बंद करना", "ᱵᱚᱸᱫ"),
    ("बनाना", "ᱵᱟᱱᱟᱣ"), ("तोड़ना", "ᱛᱩᱲᱩᱜ"),

    ("मुझे भूख लगी है", "ᱤᱧᱠᱮ ᱵᱷᱩᱠ ᱞᱟᱜᱮᱡ"), ("मुझे प्यास लगी है", "ᱤᱧᱠᱮ ᱤᱯᱤᱭ ᱞᱟᱜᱮᱡ"), ("पानी दो", "ᱫᱟᱜ ᱫᱮ"),
    ("पानी पीना", "ᱫᱟᱜ ᱯᱤ"), ("खाना खाओ", "ᱡᱚᱢ ᱮᱢ"), ("खाना दो", "ᱡᱟᱹᱶᱤ ᱫᱮ"),
    ("बिल्कुल नहीं", "ᱵᱟᱝ ᱦᱳ"), ("समझ नहीं आया", "ᱵᱩᱡᱷᱩ ᱵᱟᱝ"), ("फिर मिलेंगे", "ᱟᱡᱟᱜ ᱢᱤᱞᱚᱜ"),
    ("मेरा नाम", "ᱤᱧᱟᱜ ᱥᱮᱫᱟᱭ"),

    ("काम", "ᱠᱟᱢᱤ"), ("मेहनत", "ᱢᱮᱦᱮᱱᱛ"), ("नौकरी", "ᱱᱚᱠᱨᱤ"),
    ("पैसा", "ᱯᱟᱭᱥᱟ"), ("रुपया", "ᱨᱩᱯᱤᱭᱟ"), ("पैसे", "ᱯᱟᱭᱥᱟ"),
    ("दान", "ᱫᱟᱱ"), ("जमीन", "ᱡᱚᱢᱤᱱ"), ("सरकार", "ᱥᱚᱨᱠᱟᱨ"),
    ("कानून", "ᱠᱟᱱᱩᱱ"), ("न्याय", "ᱱᱤᱡᱚᱢ"), ("चुनाव", "ᱪᱩᱱᱟᱣ"),
    ("नेता", "ᱩᱥᱩᱞ"), ("मंत्री", "ᱢᱚᱸᱛᱤᱨᱤ"), ("त्योहार", "ᱛᱳᱦᱟᱨ"),
    ("पूजा", "ᱯᱩᱡᱟ"), ("शादी", "ᱵᱟᱯᱞᱟ"), ("नाम", "ᱥᱮᱫᱟᱭ"),
    ("भाषा", "ᱵᱷᱟᱥᱟ"), ("संस्कृति", "ᱥᱚᱸᱥᱠᱮᱛᱤ"), ("गीत", "ᱥᱮᱨᱮᱧ"),
    ("नाच", "ᱱᱟᱪ"), ("बाजा", "ᱵᱟᱡᱟ"), ("सत्य", "ᱥᱟᱫᱦᱚᱱ"),
    ("असत्य", "ᱵᱮᱠᱟᱨ"), ("सच", "ᱥᱟᱫᱦᱚᱱ"), ("देश", "ᱫᱮᱥ"),
    ("जीवन", "ᱡᱤᱣᱤ"), ("मृत्यु", "ᱢᱮᱛᱟᱜ"), ("जन्म", "ᱡᱚᱱᱚᱢ"),
    ("प्यार", "ᱞᱮᱵᱮ"), ("प्रेम", "ᱞᱮᱵᱮ"), ("मोहब्बत", "ᱞᱮᱵᱮ"),
    ("दोस्त", "ᱫᱚᱥᱛ"), ("मित्र", "ᱢᱤᱛᱨ"), ("साथी", "ᱥᱟᱛᱷᱤ"),
    ("दुश्मन", "ᱫᱩᱥᱢᱟᱱ"), ("शांति", "ᱥᱟᱸᱛᱤ"), ("बात", "ᱵᱟᱛ"),
    ("खबर", "ᱠᱷᱚᱵᱚᱨ"), ("समाचार", "ᱥᱟᱢᱟᱪᱟᱨ"),
];
