//! The compiled-in currency table.
//!
//! Entries are grouped by region and ordered by how commonly each currency
//! is picked, which is also the order the region catalog presents them in.

use pricelens_common::Region::{Africa, Americas, Asia, Crypto, Europe, MiddleEast, Oceania};

use crate::metadata::CurrencyMetadata as M;

pub(crate) static CURRENCIES: &[M] = &[
    // Americas
    M::new("USD", "$", "US Dollar", Americas, &["US", "EC", "SV", "PR", "TL", "MH", "FM", "PW", "TC", "VG", "BQ", "AS", "GU", "VI", "MP", "UM", "IO"]),
    M::new("CAD", "CA$", "Canadian Dollar", Americas, &["CA"]),
    M::new("MXN", "MX$", "Mexican Peso", Americas, &["MX"]),
    M::new("BRL", "R$", "Brazilian Real", Americas, &["BR"]).comma_decimal(),
    M::new("ARS", "AR$", "Argentine Peso", Americas, &["AR"]).comma_decimal(),
    M::new("CLP", "CL$", "Chilean Peso", Americas, &["CL"]).decimals(0).comma_decimal(),
    M::new("COP", "COL$", "Colombian Peso", Americas, &["CO"]).comma_decimal(),
    M::new("PEN", "S/", "Peruvian Sol", Americas, &["PE"]),
    M::new("UYU", "$U", "Uruguayan Peso", Americas, &["UY"]).comma_decimal(),
    M::new("PYG", "₲", "Paraguayan Guarani", Americas, &["PY"]).decimals(0).comma_decimal(),
    M::new("BOB", "Bs.", "Bolivian Boliviano", Americas, &["BO"]).comma_decimal(),
    M::new("VES", "Bs.S", "Venezuelan Bolivar", Americas, &["VE"]).comma_decimal(),
    M::new("GTQ", "Q", "Guatemalan Quetzal", Americas, &["GT"]),
    M::new("HNL", "L", "Honduran Lempira", Americas, &["HN"]),
    M::new("NIO", "C$", "Nicaraguan Cordoba", Americas, &["NI"]),
    M::new("CRC", "₡", "Costa Rican Colon", Americas, &["CR"]).space_grouped(),
    M::new("PAB", "B/.", "Panamanian Balboa", Americas, &["PA"]).pegged("USD"),
    M::new("DOP", "RD$", "Dominican Peso", Americas, &["DO"]),
    M::new("JMD", "J$", "Jamaican Dollar", Americas, &["JM"]),
    M::new("TTD", "TT$", "Trinidad and Tobago Dollar", Americas, &["TT"]),
    M::new("BBD", "Bds$", "Barbadian Dollar", Americas, &["BB"]).pegged("USD"),
    M::new("BSD", "B$", "Bahamian Dollar", Americas, &["BS"]).pegged("USD"),
    M::new("BZD", "BZ$", "Belize Dollar", Americas, &["BZ"]).pegged("USD"),
    M::new("HTG", "G", "Haitian Gourde", Americas, &["HT"]),
    M::new("CUP", "$MN", "Cuban Peso", Americas, &["CU"]),
    M::new("XCD", "EC$", "East Caribbean Dollar", Americas, &["AG", "DM", "GD", "KN", "LC", "VC", "AI", "MS"]).pegged("USD"),
    M::new("AWG", "Afl.", "Aruban Florin", Americas, &["AW"]).pegged("USD"),
    M::new("ANG", "NAf.", "Netherlands Antillean Guilder", Americas, &["CW", "SX"]).pegged("USD"),
    M::new("KYD", "CI$", "Cayman Islands Dollar", Americas, &["KY"]).pegged("USD"),
    M::new("BMD", "BD$", "Bermudian Dollar", Americas, &["BM"]).pegged("USD"),
    M::new("GYD", "G$", "Guyanese Dollar", Americas, &["GY"]),
    M::new("SRD", "Sr$", "Surinamese Dollar", Americas, &["SR"]).comma_decimal(),
    M::new("FKP", "FK£", "Falkland Islands Pound", Americas, &["FK"]).pegged("GBP"),
    // Europe
    M::new("EUR", "€", "Euro", Europe, &["DE", "FR", "IT", "ES", "NL", "BE", "AT", "PT", "IE", "FI", "GR", "LU", "SK", "SI", "EE", "LV", "LT", "MT", "CY", "HR", "MC", "SM", "VA", "AD", "ME", "XK", "GF", "GP", "MQ", "RE", "YT", "PM", "BL", "MF", "AX"]).after().comma_decimal(),
    M::new("GBP", "£", "British Pound", Europe, &["GB", "IM", "JE", "GG"]),
    M::new("CHF", "CHF", "Swiss Franc", Europe, &["CH", "LI"]).separators('.', '\'').bankers(),
    M::new("SEK", "kr", "Swedish Krona", Europe, &["SE"]).after().space_grouped(),
    M::new("NOK", "kr", "Norwegian Krone", Europe, &["NO", "SJ", "BV"]).after().space_grouped(),
    M::new("DKK", "kr.", "Danish Krone", Europe, &["DK", "GL", "FO"]).after().comma_decimal().pegged("EUR"),
    M::new("ISK", "kr", "Icelandic Krona", Europe, &["IS"]).decimals(0).after().comma_decimal(),
    M::new("PLN", "zł", "Polish Zloty", Europe, &["PL"]).after().space_grouped(),
    M::new("CZK", "Kč", "Czech Koruna", Europe, &["CZ"]).after().space_grouped(),
    M::new("HUF", "Ft", "Hungarian Forint", Europe, &["HU"]).decimals(0).after().space_grouped(),
    M::new("RON", "lei", "Romanian Leu", Europe, &["RO"]).after().comma_decimal(),
    M::new("BGN", "лв", "Bulgarian Lev", Europe, &["BG"]).after().space_grouped().pegged("EUR"),
    M::new("RSD", "дин.", "Serbian Dinar", Europe, &["RS"]).after().comma_decimal(),
    M::new("MKD", "ден", "Macedonian Denar", Europe, &["MK"]).after().comma_decimal(),
    M::new("ALL", "L", "Albanian Lek", Europe, &["AL"]).after().space_grouped(),
    M::new("BAM", "KM", "Bosnia-Herzegovina Convertible Mark", Europe, &["BA"]).after().comma_decimal().pegged("EUR"),
    M::new("MDL", "L", "Moldovan Leu", Europe, &["MD"]).after().comma_decimal(),
    M::new("UAH", "₴", "Ukrainian Hryvnia", Europe, &["UA"]).after().space_grouped(),
    M::new("BYN", "Br", "Belarusian Ruble", Europe, &["BY"]).after().space_grouped(),
    M::new("RUB", "₽", "Russian Ruble", Europe, &["RU"]).after().space_grouped(),
    M::new("TRY", "₺", "Turkish Lira", Europe, &["TR"]).comma_decimal(),
    M::new("GIP", "£", "Gibraltar Pound", Europe, &["GI"]).pegged("GBP"),
    // Africa
    M::new("ZAR", "R", "South African Rand", Africa, &["ZA"]).space_grouped(),
    M::new("NGN", "₦", "Nigerian Naira", Africa, &["NG"]),
    M::new("KES", "KSh", "Kenyan Shilling", Africa, &["KE"]),
    M::new("EGP", "E£", "Egyptian Pound", Africa, &["EG"]),
    M::new("GHS", "GH₵", "Ghanaian Cedi", Africa, &["GH"]),
    M::new("MAD", "DH", "Moroccan Dirham", Africa, &["MA", "EH"]).after().space_grouped(),
    M::new("TND", "DT", "Tunisian Dinar", Africa, &["TN"]).decimals(3).after().space_grouped().bankers(),
    M::new("DZD", "DA", "Algerian Dinar", Africa, &["DZ"]).after().space_grouped(),
    M::new("LYD", "LD", "Libyan Dinar", Africa, &["LY"]).decimals(3).bankers(),
    M::new("ETB", "Br", "Ethiopian Birr", Africa, &["ET"]),
    M::new("TZS", "TSh", "Tanzanian Shilling", Africa, &["TZ"]),
    M::new("UGX", "USh", "Ugandan Shilling", Africa, &["UG"]).decimals(0),
    M::new("RWF", "FRw", "Rwandan Franc", Africa, &["RW"]).decimals(0),
    M::new("BIF", "FBu", "Burundian Franc", Africa, &["BI"]).decimals(0),
    M::new("XAF", "FCFA", "Central African CFA Franc", Africa, &["CM", "CF", "TD", "CG", "GQ", "GA"]).decimals(0).after().space_grouped().pegged("EUR"),
    M::new("XOF", "CFA", "West African CFA Franc", Africa, &["BJ", "BF", "CI", "GW", "ML", "NE", "SN", "TG"]).decimals(0).after().space_grouped().pegged("EUR"),
    M::new("MUR", "Rs", "Mauritian Rupee", Africa, &["MU"]),
    M::new("SCR", "SR", "Seychellois Rupee", Africa, &["SC"]),
    M::new("MGA", "Ar", "Malagasy Ariary", Africa, &["MG"]).decimals(0),
    M::new("MZN", "MT", "Mozambican Metical", Africa, &["MZ"]).after().space_grouped(),
    M::new("ZMW", "ZK", "Zambian Kwacha", Africa, &["ZM"]),
    M::new("MWK", "MK", "Malawian Kwacha", Africa, &["MW"]),
    M::new("BWP", "P", "Botswana Pula", Africa, &["BW"]),
    M::new("NAD", "N$", "Namibian Dollar", Africa, &["NA"]).pegged("ZAR"),
    M::new("SZL", "E", "Swazi Lilangeni", Africa, &["SZ"]).pegged("ZAR"),
    M::new("LSL", "M", "Lesotho Loti", Africa, &["LS"]).pegged("ZAR"),
    M::new("AOA", "Kz", "Angolan Kwanza", Africa, &["AO"]).space_grouped(),
    M::new("CDF", "FC", "Congolese Franc", Africa, &["CD"]),
    M::new("SDG", "SDG", "Sudanese Pound", Africa, &["SD"]),
    M::new("SSP", "SS£", "South Sudanese Pound", Africa, &["SS"]),
    M::new("SOS", "Sh.So.", "Somali Shilling", Africa, &["SO"]),
    M::new("DJF", "Fdj", "Djiboutian Franc", Africa, &["DJ"]).decimals(0).pegged("USD"),
    M::new("ERN", "Nfk", "Eritrean Nakfa", Africa, &["ER"]).pegged("USD"),
    M::new("GMD", "D", "Gambian Dalasi", Africa, &["GM"]),
    M::new("GNF", "FG", "Guinean Franc", Africa, &["GN"]).decimals(0),
    M::new("SLE", "Le", "Sierra Leonean Leone", Africa, &["SL"]),
    M::new("LRD", "L$", "Liberian Dollar", Africa, &["LR"]),
    M::new("CVE", "Esc", "Cape Verdean Escudo", Africa, &["CV"]).after().space_grouped().pegged("EUR"),
    M::new("STN", "Db", "Sao Tome and Principe Dobra", Africa, &["ST"]).after().comma_decimal(),
    M::new("KMF", "CF", "Comorian Franc", Africa, &["KM"]).decimals(0).pegged("EUR"),
    M::new("MRU", "UM", "Mauritanian Ouguiya", Africa, &["MR"]),
    M::new("ZWL", "Z$", "Zimbabwean Dollar", Africa, &["ZW"]),
    M::new("SHP", "£", "Saint Helena Pound", Africa, &["SH"]).pegged("GBP"),
    // Asia
    M::new("JPY", "¥", "Japanese Yen", Asia, &["JP"]).decimals(0),
    M::new("CNY", "CN¥", "Chinese Yuan", Asia, &["CN"]),
    M::new("INR", "₹", "Indian Rupee", Asia, &["IN"]),
    M::new("KRW", "₩", "South Korean Won", Asia, &["KR"]).decimals(0),
    M::new("HKD", "HK$", "Hong Kong Dollar", Asia, &["HK"]).pegged("USD"),
    M::new("SGD", "S$", "Singapore Dollar", Asia, &["SG"]),
    M::new("TWD", "NT$", "New Taiwan Dollar", Asia, &["TW"]),
    M::new("IDR", "Rp", "Indonesian Rupiah", Asia, &["ID"]).decimals(0).comma_decimal(),
    M::new("MYR", "RM", "Malaysian Ringgit", Asia, &["MY"]),
    M::new("THB", "฿", "Thai Baht", Asia, &["TH"]),
    M::new("VND", "₫", "Vietnamese Dong", Asia, &["VN"]).decimals(0).after().comma_decimal(),
    M::new("PHP", "₱", "Philippine Peso", Asia, &["PH"]),
    M::new("PKR", "Rs", "Pakistani Rupee", Asia, &["PK"]),
    M::new("BDT", "৳", "Bangladeshi Taka", Asia, &["BD"]),
    M::new("LKR", "Rs", "Sri Lankan Rupee", Asia, &["LK"]),
    M::new("NPR", "रु", "Nepalese Rupee", Asia, &["NP"]).pegged("INR"),
    M::new("BTN", "Nu.", "Bhutanese Ngultrum", Asia, &["BT"]).pegged("INR"),
    M::new("MVR", "Rf", "Maldivian Rufiyaa", Asia, &["MV"]),
    M::new("MMK", "K", "Myanmar Kyat", Asia, &["MM"]),
    M::new("KHR", "៛", "Cambodian Riel", Asia, &["KH"]).after(),
    M::new("LAK", "₭", "Lao Kip", Asia, &["LA"]).decimals(0),
    M::new("BND", "B$", "Brunei Dollar", Asia, &["BN"]).pegged("SGD"),
    M::new("MOP", "MOP$", "Macanese Pataca", Asia, &["MO"]).pegged("HKD"),
    M::new("MNT", "₮", "Mongolian Tugrik", Asia, &["MN"]),
    M::new("KZT", "₸", "Kazakhstani Tenge", Asia, &["KZ"]).after().space_grouped(),
    M::new("UZS", "soʻm", "Uzbekistani Som", Asia, &["UZ"]).after().space_grouped(),
    M::new("KGS", "сом", "Kyrgystani Som", Asia, &["KG"]).after().space_grouped(),
    M::new("TJS", "SM", "Tajikistani Somoni", Asia, &["TJ"]).after().space_grouped(),
    M::new("TMT", "m", "Turkmenistani Manat", Asia, &["TM"]).after().space_grouped(),
    M::new("AFN", "؋", "Afghan Afghani", Asia, &["AF"]),
    M::new("GEL", "₾", "Georgian Lari", Asia, &["GE"]).after().space_grouped(),
    M::new("AMD", "֏", "Armenian Dram", Asia, &["AM"]).after().space_grouped(),
    M::new("AZN", "₼", "Azerbaijani Manat", Asia, &["AZ"]).after().space_grouped(),
    M::new("KPW", "₩", "North Korean Won", Asia, &["KP"]),
    // Middle East
    M::new("AED", "AED", "UAE Dirham", MiddleEast, &["AE"]).pegged("USD"),
    M::new("SAR", "SAR", "Saudi Riyal", MiddleEast, &["SA"]).pegged("USD"),
    M::new("ILS", "₪", "Israeli New Shekel", MiddleEast, &["IL", "PS"]),
    M::new("QAR", "QAR", "Qatari Riyal", MiddleEast, &["QA"]).pegged("USD"),
    M::new("KWD", "KD", "Kuwaiti Dinar", MiddleEast, &["KW"]).decimals(3).bankers(),
    M::new("BHD", "BD", "Bahraini Dinar", MiddleEast, &["BH"]).decimals(3).bankers().pegged("USD"),
    M::new("OMR", "OMR", "Omani Rial", MiddleEast, &["OM"]).decimals(3).bankers().pegged("USD"),
    M::new("JOD", "JD", "Jordanian Dinar", MiddleEast, &["JO"]).decimals(3).bankers().pegged("USD"),
    M::new("IQD", "IQD", "Iraqi Dinar", MiddleEast, &["IQ"]).decimals(3).bankers(),
    M::new("LBP", "LBP", "Lebanese Pound", MiddleEast, &["LB"]).decimals(0),
    M::new("SYP", "SYP", "Syrian Pound", MiddleEast, &["SY"]).decimals(0),
    M::new("YER", "YER", "Yemeni Rial", MiddleEast, &["YE"]).decimals(0),
    M::new("IRR", "IRR", "Iranian Rial", MiddleEast, &["IR"]).decimals(0),
    // Oceania
    M::new("AUD", "A$", "Australian Dollar", Oceania, &["AU", "KI", "NR", "TV", "CX", "CC", "NF", "HM"]),
    M::new("NZD", "NZ$", "New Zealand Dollar", Oceania, &["NZ", "CK", "NU", "PN", "TK"]),
    M::new("FJD", "FJ$", "Fijian Dollar", Oceania, &["FJ"]),
    M::new("PGK", "K", "Papua New Guinean Kina", Oceania, &["PG"]),
    M::new("WST", "WS$", "Samoan Tala", Oceania, &["WS"]),
    M::new("TOP", "T$", "Tongan Pa'anga", Oceania, &["TO"]),
    M::new("VUV", "VT", "Vanuatu Vatu", Oceania, &["VU"]).decimals(0),
    M::new("SBD", "SI$", "Solomon Islands Dollar", Oceania, &["SB"]),
    M::new("XPF", "CFPF", "CFP Franc", Oceania, &["PF", "NC", "WF"]).decimals(0).after().space_grouped().pegged("EUR"),
    // Crypto
    M::new("BTC", "₿", "Bitcoin", Crypto, &[]).decimals(8).display_only(),
    M::new("ETH", "Ξ", "Ethereum", Crypto, &[]).decimals(6).display_only(),
    M::new("USDT", "USDT", "Tether", Crypto, &[]).after().pegged("USD").display_only(),
    M::new("USDC", "USDC", "USD Coin", Crypto, &[]).after().pegged("USD").display_only(),
    M::new("BNB", "BNB", "BNB", Crypto, &[]).decimals(6).after().display_only(),
    M::new("SOL", "SOL", "Solana", Crypto, &[]).decimals(4).after().display_only(),
    M::new("XRP", "XRP", "XRP", Crypto, &[]).decimals(4).after().display_only(),
];
