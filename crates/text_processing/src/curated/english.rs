//! Hindi→English lexicon

pub(super) const HINDI_ENGLISH: &[(&str, &str)] = &[
    ("नमस्ते", "hello"), ("नमस्कार", "greetings"), ("जोहार", "greetings"),
    ("हाँ", "yes"), ("हां", "yes"), ("नहीं", "no"),
    ("नही", "no"), ("धन्यवाद", "thank you"), ("शुक्रिया", "thank you"),
    ("कृपया", "please"), ("माफ करो", "sorry"), ("माफ कीजिए", "excuse me"),
    ("अलविदा", "goodbye"), ("फिर मिलेंगे", "see you again"), ("कैसे हो", "how are you"),
    ("ठीक हूँ", "I am fine"), ("क्या नाम है", "what is the name"), ("मेरा नाम", "my name"),
    ("आपका नाम", "your name"), ("मैं", "I"), ("आप", "you"),
    ("वह", "he/she"), ("हम", "we"), ("वे", "they"),
    ("यह", "this"), ("वो", "that"),

    ("माँ", "mother"), ("माता", "mother"), ("अम्मा", "mother"),
    ("बाप", "father"), ("पिता", "father"), ("पापा", "father"),
    ("बाबा", "father"), ("भाई", "brother"), ("बहन", "sister"),
    ("दादा", "grandfather"), ("दादी", "grandmother"), ("नाना", "maternal grandfather"),
    ("नानी", "maternal grandmother"), ("चाचा", "uncle"), ("चाची", "aunt"),
    ("मामा", "maternal uncle"), ("मामी", "maternal aunt"), ("बेटा", "son"),
    ("बेटी", "daughter"), ("पोता", "grandson"), ("पोती", "granddaughter"),
    ("पति", "husband"), ("पत्नी", "wife"), ("परिवार", "family"),
    ("बच्चा", "child"), ("बच्चे", "children"),

    ("सिर", "head"), ("बाल", "hair"), ("आँख", "eye"),
    ("आंख", "eye"), ("कान", "ear"), ("नाक", "nose"),
    ("मुँह", "mouth"), ("मुंह", "mouth"), ("दाँत", "teeth"),
    ("जीभ", "tongue"), ("गर्दन", "neck"), ("कंधा", "shoulder"),
    ("हाथ", "hand"), ("उँगली", "finger"), ("पैर", "foot"),
    ("पेट", "stomach"), ("दिल", "heart"), ("हृदय", "heart"),
    ("रक्त", "blood"), ("खून", "blood"), ("त्वचा", "skin"),
    ("हड्डी", "bone"),

    ("पानी", "water"), ("जल", "water"), ("आग", "fire"),
    ("हवा", "air"), ("वायु", "air"), ("मिट्टी", "soil"),
    ("पत्थर", "stone"), ("पहाड़", "mountain"), ("नदी", "river"),
    ("समुद्र", "ocean"), ("आसमान", "sky"), ("आकाश", "sky"),
    ("सूरज", "sun"), ("सूर्य", "sun"), ("चाँद", "moon"),
    ("चंद्रमा", "moon"), ("तारा", "star"), ("बादल", "cloud"),
    ("बारिश", "rain"), ("वर्षा", "rain"), ("बर्फ", "snow"),
    ("तूफान", "storm"), ("मौसम", "weather"), ("जंगल", "forest"),
    ("पेड़", "tree"), ("पौधा", "plant"), ("फूल", "flower"),
    ("पत्ता", "leaf"), ("घास", "grass"), ("बीज", "seed"),
    ("फल", "fruit"), ("सब्जी", "vegetable"),

    ("कुत्ता", "dog"), ("बिल्ली", "cat"), ("गाय", "cow"),
    ("बैल", "bull"), ("घोड़ा", "horse"), ("हाथी", "elephant"),
    ("शेर", "lion"), ("बाघ", "tiger"), ("भालू", "bear"),
    ("हिरण", "deer"), ("बंदर", "monkey"), ("साँप", "snake"),
    ("मछली", "fish"), ("पक्षी", "bird"), ("मुर्गी", "hen"),
    ("बकरी", "goat"), ("भेड़", "sheep"), ("सूअर", "pig"),
    ("चूहा", "mouse"), ("खरगोश", "rabbit"), ("तोता", "parrot"),
    ("कौआ", "crow"), ("कबूतर", "pigeon"),

    ("खाना", "to eat"), ("रोटी", "bread"), ("चावल", "rice"),
    ("दाल", "lentils"), ("सब्ज़ी", "vegetable curry"), ("दूध", "milk"),
    ("चाय", "tea"), ("जूस", "juice"), ("चीनी", "sugar"),
    ("नमक", "salt"), ("तेल", "oil"), ("घी", "clarified butter"),
    ("मक्खन", "butter"), ("दही", "yogurt"), ("आटा", "flour"),
    ("सेब", "apple"), ("केला", "banana"), ("आम", "mango"),
    ("अंगूर", "grapes"), ("संतरा", "orange"), ("टमाटर", "tomato"),
    ("प्याज", "onion"), ("लहसुन", "garlic"), ("अदरक", "ginger"),
    ("मिर्च", "chilli"),

    ("काला", "black"), ("सफेद", "white"), ("लाल", "red"),
    ("हरा", "green"), ("नीला", "blue"), ("पीला", "yellow"),
    ("नारंगी", "orange"), ("गुलाबी", "pink"), ("बैंगनी", "purple"),
    ("भूरा", "brown"), ("सोना", "to sleep"), ("चाँदी", "silver"),
    ("रंग", "color"),

    ("एक", "one"), ("दो", "two"), ("तीन", "three"),
    ("चार", "four"), ("पाँच", "five"), ("छह", "six"),
    ("सात", "seven"), ("आठ", "eight"), ("नौ", "nine"),
    ("दस", "ten"), ("बीस", "twenty"), ("सौ", "hundred"),
    ("हजार", "thousand"), ("शून्य", "zero"), ("संख्या", "number"),

    ("दिन", "day"), ("रात", "night"), ("सुबह", "morning"),
    ("शाम", "evening"), ("दोपहर", "afternoon"), ("घंटा", "hour"),
    ("मिनट", "minute"), ("सेकंड", "second"), ("हफ्ता", "week"),
    ("महीना", "month"), ("साल", "year"), ("आज", "today"),
    ("कल", "tomorrow/yesterday"), ("परसों", "day after tomorrow"), ("अभी", "now"),
    ("बाद में", "later"), ("सोमवार", "Monday"), ("मंगलवार", "Tuesday"),
    ("बुधवार", "Wednesday"), ("गुरुवार", "Thursday"), ("शुक्रवार", "Friday"),
    ("शनिवार", "Saturday"), ("रविवार", "Sunday"),

    ("घर", "house"), ("गाँव", "village"), ("शहर", "city"),
    ("देश", "country"), ("राज्य", "state"), ("गली", "street"),
    ("बाजार", "market"), ("दुकान", "shop"), ("स्कूल", "school"),
    ("कॉलेज", "college"), ("अस्पताल", "hospital"), ("मंदिर", "temple"),
    ("मस्जिद", "mosque"), ("चर्च", "church"), ("बैंक", "bank"),
    ("डाकघर", "post office"), ("पुलिस", "police"), ("स्टेशन", "station"),
    ("हवाई अड्डा", "airport"),

    ("अच्छा", "good"), ("बुरा", "bad"), ("बड़ा", "big"),
    ("छोटा", "short"), ("लंबा", "tall/long"), ("मोटा", "fat"),
    ("पतला", "thin"), ("गर्म", "hot"), ("ठंडा", "cold"),
    ("नया", "new"), ("पुराना", "old"), ("तेज", "fast"),
    ("धीमा", "slow"), ("सुंदर", "beautiful"), ("बदसूरत", "ugly"),
    ("खुश", "happy"), ("दुखी", "sad"), ("डरा", "scared"),
    ("बहादुर", "brave"), ("चालाक", "clever"), ("बेवकूफ", "foolish"),
    ("अमीर", "rich"), ("गरीब", "poor"), ("मुश्किल", "difficult"),
    ("आसान", "easy"), ("सही", "correct"), ("गलत", "wrong"),
    ("सच", "true"), ("झूठ", "false"), ("सत्य", "truth"),
    ("असत्य", "untruth"), ("ज़रूरी", "necessary"), ("खाली", "empty"),
    ("भरा", "full"), ("साफ", "clean"), ("गंदा", "dirty"),

    ("जाना", "to go"), ("आना", "to come"), ("पीना", "to drink"),
    ("जागना", "to wake up"), ("बैठना", "to sit"), ("उठना", "to stand"),
    ("चलना", "to walk"), ("दौड़ना", "to run"), ("बोलना", "to speak"),
    ("सुनना", "to listen"), ("देखना", "to see"), ("पढ़ना", "to read"),
    ("लिखना", "to write"), ("सीखना", "to learn"), ("सिखाना", "to teach"),
    ("काम करना", "to work"), ("खेलना", "to play"), ("गाना", "to sing"),
    ("नाचना", "to dance"), ("हँसना", "to laugh"), ("रोना", "to cry"),
    ("प्यार करना", "to love"), ("पूछना", "to ask"), ("बताना", "to tell"),
    ("समझना", "to understand"), ("सोचना", "to think"), ("मिलना", "to meet"),
    ("देना", "to give"), ("लेना", "to take"), ("खरीदना", "to buy"),
    ("बेचना", "to sell"), ("खोलना", "to open"), ("बंद करना", "to close"),
    ("किताब", "book"), ("कलम", "pen"), ("कागज", "paper"),
    ("शिक्षक", "teacher"), ("छात्र", "student"), ("पाठ", "lesson"),
    ("परीक्षा", "exam"), ("उत्तर", "answer"), ("प्रश्न", "question"),

    ("फोन", "phone"), ("मोबाइल", "mobile"), ("कंप्यूटर", "computer"),
    ("इंटरनेट", "internet"), ("टीवी", "television"), ("रेडियो", "radio"),
    ("गाड़ी", "car"), ("बस", "bus"), ("रेलगाड़ी", "train"),
    ("साइकिल", "bicycle"),

    ("प्यार", "love"), ("नफरत", "hate"), ("दोस्ती", "friendship"),
    ("दुश्मनी", "enmity"), ("शांति", "peace"), ("युद्ध", "war"),
    ("स्वतंत्रता", "freedom"), ("न्याय", "justice"), ("धर्म", "religion"),
    ("भगवान", "God"), ("पूजा", "worship"), ("प्रार्थना", "prayer"),
    ("भारत", "India"), ("हिंदुस्तान", "India"), ("इंडिया", "India"),
    ("भाषा", "language"), ("हिंदी", "Hindi"), ("संताली", "Santali"),
    ("अनुवाद", "translation"), ("शब्द", "word"), ("वाक्य", "sentence"),
    ("कहानी", "story"), ("गीत", "song"), ("कविता", "poem"),
    ("खुशी", "happiness"), ("दुख", "sorrow"), ("डर", "fear"),
    ("उम्मीद", "hope"), ("सपना", "dream"), ("जीवन", "life"),
    ("मृत्यु", "death"), ("जन्म", "birth"), ("स्वास्थ्य", "health"),
    ("दवाई", "medicine"), ("बीमार", "sick"), ("ठीक", "fine/well"),
];
