//! User-facing strings. The audience reads Bengali.

// -- Public form --

pub const NAME_REQUIRED: &str = "নাম আবশ্যক";
pub const NAME_TOO_SHORT: &str = "নাম কমপক্ষে ২ অক্ষরের হতে হবে";
pub const MOBILE_REQUIRED: &str = "মোবাইল নম্বর আবশ্যক";
pub const MOBILE_INVALID: &str = "দয়া করে একটি বৈধ বাংলাদেশী মোবাইল নম্বর দিন";
pub const AMOUNT_REQUIRED: &str = "পরিমাণ আবশ্যক";
pub const AMOUNT_INVALID: &str = "দয়া করে একটি বৈধ পরিমাণ দিন";

pub const FORM_HAS_ERRORS: &str = "দয়া করে ফর্মের ত্রুটিগুলি সংশোধন করুন";
pub const SUBMIT_OK: &str =
    "রিপোর্ট সফলভাবে জমা দেওয়া হয়েছে। ন্যায়বিচার আনতে সাহায্য করার জন্য ধন্যবাদ।";
pub const SUBMIT_FAILED: &str = "রিপোর্ট জমা দিতে ব্যর্থ। দয়া করে আবার চেষ্টা করুন।";
pub const SUBMIT_BUSY: &str = "রিপোর্ট জমা দেওয়া হচ্ছে...";

// -- Edit dialog --

pub const EDIT_NAME_REQUIRED: &str = "নাম প্রয়োজন";
pub const EDIT_MOBILE_REQUIRED: &str = "মোবাইল নম্বর প্রয়োজন";
pub const EDIT_AMOUNT_INVALID: &str = "সঠিক পরিমাণ লিখুন";
pub const EDIT_OK: &str = "রিপোর্ট সফলভাবে আপডেট হয়েছে";
pub const EDIT_FAILED: &str = "রিপোর্ট আপডেট করতে ব্যর্থ";

// -- Dashboard --

pub const LOAD_FAILED: &str = "রিপোর্ট লোড করতে ব্যর্থ";
pub const NO_REPORTS: &str = "এখনো কোনো রিপোর্ট জমা দেওয়া হয়নি।";
pub const NO_MATCHES: &str = "আপনার অনুসন্ধানের সাথে কোনো রিপোর্ট মিলেনি।";

// -- Login --

pub const PASSWORD_BLANK: &str = "দয়া করে অ্যাডমিন পাসওয়ার্ড দিন";
pub const PASSWORD_WRONG: &str = "ভুল পাসওয়ার্ড";
pub const LOGIN_OK: &str = "সফলভাবে লগইন হয়েছে";
pub const LOGOUT_OK: &str = "সফলভাবে লগ আউট হয়েছে";
pub const ADMIN_REQUIRED: &str = "অ্যাডমিন হিসেবে লগইন করুন";
