//! Default reference table shipped with the engine.
//!
//! Suggestions are generic triage text for an intake summary, not medical
//! advice.

/// `(symptom, diagnosis, treatment)` rows in matching order
pub(crate) const DEFAULT_SYMPTOMS: &[(&str, &str, &str)] = &[
    ("fever", "Viral or bacterial infection", "Rest, fluids and antipyretics such as paracetamol"),
    ("chills", "Febrile illness", "Keep warm, fluids, treat the underlying fever"),
    ("fatigue", "Anemia, thyroid disorder or sleep deprivation", "Blood work; review sleep and diet"),
    ("malaise", "Nonspecific systemic illness", "Rest and monitoring; review if persistent"),
    ("weakness", "Electrolyte imbalance or neuromuscular disorder", "Electrolyte panel and neurological exam"),
    ("weight loss", "Hyperthyroidism, diabetes or malignancy", "Thyroid panel, glucose and further work-up"),
    ("weight gain", "Hypothyroidism or fluid retention", "Thyroid panel and dietary review"),
    ("headache", "Tension headache or migraine", "Analgesics, hydration and rest"),
    ("abdominal pain", "Gastritis, appendicitis or gastroenteritis", "Abdominal exam; imaging if severe"),
    ("chest pain", "Angina or musculoskeletal strain", "Urgent ECG and cardiac evaluation"),
    ("joint pain", "Arthritis", "NSAIDs and physiotherapy"),
    ("muscle pain", "Myalgia from strain or viral illness", "Rest, analgesics and gentle stretching"),
    ("back pain", "Lumbar strain", "Analgesics, heat and physiotherapy"),
    ("cough", "Upper respiratory infection", "Fluids, honey and cough suppressants; chest exam if persistent"),
    ("shortness of breath", "Asthma, COPD or heart failure", "Pulse oximetry, bronchodilators and urgent review"),
    ("difficulty breathing", "Airway obstruction or pneumonia", "Emergency assessment and oxygen therapy"),
    ("wheezing", "Asthma or bronchitis", "Inhaled bronchodilators"),
    ("sore throat", "Pharyngitis", "Warm fluids, lozenges; strep test if febrile"),
    ("nausea", "Gastroenteritis or medication side effect", "Antiemetics and small frequent meals"),
    ("vomiting", "Gastroenteritis or food poisoning", "Oral rehydration and antiemetics"),
    ("diarrhea", "Infectious diarrhea", "Oral rehydration salts"),
    ("constipation", "Low fiber intake or dehydration", "Fiber, fluids and mild laxatives"),
    ("bloating", "Irritable bowel syndrome or food intolerance", "Dietary review and simethicone"),
    ("heartburn", "Gastroesophageal reflux disease", "Antacids or proton pump inhibitors"),
    ("dizziness", "Vestibular disorder or hypotension", "Blood pressure check and vestibular exam"),
    ("lightheadedness", "Orthostatic hypotension or dehydration", "Fluids and orthostatic vitals"),
    ("tingling", "Peripheral neuropathy", "Glucose and vitamin B12 levels"),
    ("numbness", "Nerve compression or stroke", "Neurological exam; urgent if sudden onset"),
    ("seizures", "Epilepsy", "Neurology referral and anticonvulsants"),
    ("tremors", "Essential tremor or Parkinson's disease", "Neurology referral"),
    ("palpitations", "Arrhythmia or anxiety", "ECG and Holter monitoring"),
    ("irregular heartbeat", "Atrial fibrillation", "ECG and anticoagulation assessment"),
    ("chest tightness", "Asthma or angina", "ECG and spirometry"),
    ("fainting", "Vasovagal syncope or arrhythmia", "ECG and orthostatic vitals"),
    ("rash", "Dermatitis or allergic reaction", "Antihistamines and topical corticosteroids"),
    ("itching", "Allergic reaction or dry skin", "Antihistamines and emollients"),
    ("redness", "Inflammation or cellulitis", "Cold compress; antibiotics if infected"),
    ("swelling", "Edema or injury", "Elevation, compression and cause review"),
    ("blisters", "Burns, friction or viral infection", "Keep clean and covered; do not pop"),
    ("bruising", "Trauma or clotting disorder", "Coagulation panel if unexplained"),
    ("frequent urination", "Urinary tract infection or diabetes", "Urinalysis and blood glucose"),
    ("painful urination", "Urinary tract infection", "Urinalysis and antibiotics"),
    ("blood in urine", "Kidney stones or infection", "Urinalysis and renal imaging"),
    ("urinary incontinence", "Overactive bladder", "Pelvic floor exercises and bladder training"),
    ("anxiety", "Generalized anxiety disorder", "Counseling; anxiolytics if indicated"),
    ("depression", "Major depressive disorder", "Counseling and antidepressants if indicated"),
    ("mood swings", "Mood disorder or hormonal imbalance", "Mental health assessment"),
    ("confusion", "Delirium or metabolic disturbance", "Urgent evaluation of cause"),
    ("forgetfulness", "Cognitive impairment", "Cognitive screening"),
    ("blurred vision", "Refractive error or diabetic retinopathy", "Eye exam and glucose check"),
    ("red eyes", "Conjunctivitis", "Lubricating drops; antibiotic drops if bacterial"),
    ("itchy eyes", "Allergic conjunctivitis", "Antihistamine eye drops"),
    ("dry eyes", "Dry eye syndrome", "Artificial tears"),
    ("eye pain", "Glaucoma or corneal abrasion", "Urgent ophthalmology review"),
];
