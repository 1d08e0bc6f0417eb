/// Version of the built-in rule table
pub const DEFAULT_RULES_VERSION: u32 = 1;

/// Built-in (pattern, category) rules, evaluated top to bottom.
///
/// Order matters: an earlier pattern shadows any later one it is a substring of
/// ("notepad" before "notepad++", "sqlite" before "db browser for sqlite").
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    ("chrome", "Web Browser"),
    ("firefox", "Web Browser"),
    ("msedge", "Web Browser"),
    ("safari", "Web Browser"),
    ("opera", "Web Browser"),
    ("iexplore", "Web Browser"),
    ("notepad", "Text Editor"),
    ("notepad++", "Text Editor"),
    ("sublime_text", "Text Editor"),
    ("vscode", "Development"),
    ("code", "Development"),
    ("visualstudio", "Development"),
    ("devenv", "Development"),
    ("powershell", "Shell"),
    ("cmd", "Shell"),
    ("conhost", "Shell"),
    ("excel", "Microsoft Office"),
    ("word", "Microsoft Office"),
    ("powerpnt", "Microsoft Office"),
    ("outlook", "Microsoft Office"),
    ("onenote", "Microsoft Office"),
    ("access", "Microsoft Office"),
    ("msaccess", "Microsoft Office"),
    ("onedrive", "Cloud Storage"),
    ("dropbox", "Cloud Storage"),
    ("googledrive", "Cloud Storage"),
    ("teams", "Communication"),
    ("skype", "Communication"),
    ("slack", "Communication"),
    ("discord", "Communication"),
    ("zoom", "Communication"),
    ("webex", "Communication"),
    ("thunderbird", "Email"),
    ("spotify", "Music"),
    ("itunes", "Music"),
    ("vlc", "Media Player"),
    ("wmplayer", "Media Player"),
    ("realplayer", "Media Player"),
    ("winamp", "Media Player"),
    ("steam", "Gaming"),
    ("epicgameslauncher", "Gaming"),
    ("uplay", "Gaming"),
    ("valorant", "Gaming"),
    ("leagueoflegends", "Gaming"),
    ("fortnite", "Gaming"),
    ("minecraft", "Gaming"),
    ("roblox", "Gaming"),
    ("pycharm", "Development"),
    ("eclipse", "Development"),
    ("intellij", "Development"),
    ("netbeans", "Development"),
    ("atom", "Development"),
    ("brackets", "Development"),
    ("acrobat", "PDF Reader"),
    ("foxit", "PDF Reader"),
    ("adobephotoshop", "Creative"),
    ("adobeillustrator", "Creative"),
    ("adobepremiere", "Creative"),
    ("lightroom", "Creative"),
    ("gimp", "Creative"),
    ("autocad", "Design"),
    ("sketchup", "Design"),
    ("solidworks", "Design"),
    ("matlab", "Science/Engineering"),
    ("rstudio", "Science/Engineering"),
    ("anaconda", "Science/Engineering"),
    ("explorer", "File Manager"),
    ("filezilla", "FTP Client"),
    ("winscp", "FTP Client"),
    ("putty", "Terminal/SSH"),
    ("vmware", "Virtualization"),
    ("virtualbox", "Virtualization"),
    ("docker", "Virtualization"),
    ("blender", "Creative/Design"),
    ("obs", "Streaming/Recording"),
    ("streamlabs", "Streaming/Recording"),
    ("powerbi", "Analytics"),
    ("tableau", "Analytics"),
    ("mspaint", "Graphics"),
    ("photos", "Graphics"),
    ("f.lux", "Utilities"),
    ("taskmgr", "Utilities"),
    ("calc", "Utilities"),
    ("snippingtool", "Utilities"),
    ("msconfig", "Utilities"),
    ("control", "Utilities"),
    ("regedit", "Utilities"),
    ("oculus", "VR/AR"),
    ("vive", "VR/AR"),
    ("vrchat", "VR/AR"),
    ("steamvr", "VR/AR"),
    ("unity", "Game Development"),
    ("unreal", "Game Development"),
    ("godot", "Game Development"),
    ("tensorflow", "AI/ML"),
    ("pytorch", "AI/ML"),
    ("keras", "AI/ML"),
    ("jupyter", "AI/ML/Research"),
    ("chatgpt", "AI/ML"),
    ("openai", "AI/ML"),
    ("colab", "AI/ML/Research"),
    ("pornhub", "Adult Content"),
    ("xvideos", "Adult Content"),
    ("redtube", "Adult Content"),
    ("xhamster", "Adult Content"),
    ("tinder", "Dating"),
    ("bumble", "Dating"),
    ("hinge", "Dating"),
    ("sqlite", "Database"),
    ("marvel", "Gaming"),
    ("dyinglight", "Gaming"),
    ("racing", "Gaming"),
    ("exoborne", "Gaming"),
    ("assettocorsa", "Gaming"),
    ("acs", "Gaming"),
    ("db browser for sqlite", "Database"),
];
