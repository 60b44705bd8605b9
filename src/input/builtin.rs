//! 組み込み翻訳テーブル
//!
//! `(キー, アラビア語, 英語)` の並び。順序は逆引きインデックスの衝突解決
//! （後勝ち）に使われるため意味を持つ。

/// 組み込みの翻訳エントリ
pub(crate) const BUILTIN_ENTRIES: &[(&str, &str, &str)] = &[
    (
        "siteTitle",
        "كلية الحوسبة | جامعة SEU - بحث المواد والمقررات الدراسية",
        "SEU Computing College – Course & Subject Search",
    ),
    ("searchPlaceholder", "ابحث عن مادة أو رقم مقرر...", "Search for a course or subject code…"),
    ("myAccount", "حسابي", "My Account"),
    ("login", "تسجيل الدخول", "Login"),
    ("register", "إنشاء حساب", "Register"),
    ("logout", "تسجيل الخروج", "Logout"),
    ("backToMain", "العودة للرئيسية", "Back to Main"),
    ("mainPage", "الرئيسية", "Home"),
    ("home", "الرئيسية", "Home"),
    ("allColleges", "جميع الكليات", "All Colleges"),
    ("computerScience", "علوم الحاسب", "Computer Science"),
    ("informationTechnology", "تقنية المعلومات", "Information Technology"),
    ("dataScience", "علوم البيانات", "Data Science"),
    ("addCourse", "إضافة مادة", "Add Course"),
    ("courses", "المواد", "Courses"),
    ("resources", "الموارد", "Resources"),
    ("description", "الوصف", "Description"),
    ("major", "التخصص", "Major"),
    ("level", "المستوى", "Level"),
    ("credits", "الساعات", "Credits"),
    ("seeAll", "عرض الكل", "See All"),
    ("localCourses", "المواد المحلية", "Local Courses"),
    ("firebaseCourses", "مواد قاعدة البيانات", "Database Courses"),
    ("totalContributions", "إجمالي المساهمات", "Total Contributions"),
    ("academicMaterials", "نظام المواد الأكاديمية", "Academic Materials System"),
    ("collegeComputing", "كلية الحوسبة", "Computing College"),
    ("universityPlatform", "منصة شاملة لجميع كليات الجامعة", "Comprehensive platform for all university colleges"),
    ("universityName", "الجامعة السعودية الإلكترونية", "Saudi Electronic University"),
    ("businessCollege", "كلية العلوم الإدارية والمالية", "Business & Finance College"),
    ("healthCollege", "كلية الصحة", "Health College"),
    ("computing", "الحوسبة", "Computing"),
    ("business", "الأعمال", "Business"),
    ("health", "الصحة", "Health"),
    ("searchCourses", "البحث عن المواد", "Search Courses"),
    ("noResourcesAvailable", "لا تتوفر موارد لهذه المادة حالياً", "No resources available for this course currently"),
    ("courseNotFound", "المادة غير موجودة في النظام", "Course not found in the system"),
    ("languageText", "العربية", "English"),
    ("mobileLanguageText", "العربية / English", "English / العربية"),
    ("toggleLanguage", "English", "العربية"),
    ("shareCourse", "مشاركة المادة", "Share Course"),
    ("courseDetails", "تفاصيل المادة", "Course Details"),
    ("courseMaterials", "مواد المقرر", "Course Materials"),
    ("downloadCurriculum", "تحميل المنهج", "Download Curriculum"),
    ("educationalResources", "الموارد التعليمية", "Educational Resources"),
    ("additionalMaterials", "مواد إضافية", "Additional Materials"),
    ("recommendedBook", "كتاب مقرر موصى به", "Recommended Course Book"),
    ("interactiveLearning", "منصة التعلم التفاعلية", "Interactive Learning Platform"),
    ("shareWith", "مشاركة المادة", "Share Course"),
    ("qrCodeAccess", "كود QR للوصول السريع", "QR Code for Quick Access"),
    ("scanCode", "امسح الكود للوصول المباشر للمادة", "Scan code for direct access to course"),
    ("directLink", "الرابط المباشر للمادة", "Direct Course Link"),
    ("websiteLink", "رابط الموقع مع تحديد المادة", "Website Link with Course Selection"),
    ("copy", "نسخ", "Copy"),
    ("copied", "تم النسخ!", "Copied!"),
    ("shareSocial", "مشاركة عبر وسائل التواصل", "Share via Social Media"),
    ("whatsapp", "واتساب", "WhatsApp"),
    ("telegram", "تيليجرام", "Telegram"),
    ("twitter", "تويتر", "Twitter"),
    ("facebook", "فيسبوك", "Facebook"),
    ("watchOnYouTube", "مشاهدة على يوتيوب", "Watch on YouTube"),
    ("openChat", "فتح المحادثة", "Open Chat"),
    ("enterCourse", "دخول المقرر", "Enter Course"),
    ("openFiles", "فتح الملفات", "Open Files"),
    ("download", "تحميل", "Download"),
    ("educationalContent", "محتوى تعليمي", "Educational Content"),
    ("recordedLectures", "محاضرات مسجلة", "Recorded Lectures"),
    ("educationalFiles", "ملفات تعليمية", "Educational Files"),
    ("compressedFiles", "ملفات مضغوطة", "Compressed Files"),
    ("educationalResource", "مورد تعليمي", "Educational Resource"),
    ("blackBoard", "بلاك بورد", "BlackBoard"),
    ("googleDrive", "جوجل درايف", "Google Drive"),
    ("mega", "ميجا", "Mega"),
    ("adminDashboard", "لوحة الإدارة", "Admin Dashboard"),
    ("myContributions", "مساهماتي", "My Contributions"),
    ("email", "البريد الإلكتروني", "Email"),
    ("password", "كلمة المرور", "Password"),
    ("fullName", "الاسم الكامل", "Full Name"),
    ("deleteCourse", "حذف المادة", "Delete Course"),
    ("editCourse", "تعديل المادة", "Edit Course"),
    ("beginner", "مبتدئ", "Beginner"),
    ("intermediate", "متوسط", "Intermediate"),
    ("advanced", "متقدم", "Advanced"),
];
